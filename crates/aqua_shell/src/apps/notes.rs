//! Scratch-pad notes surface. Content lives for the window's lifetime only.

use leptos::*;

pub(super) fn mount_notes_app() -> View {
    view! { <NotesApp/> }.into_view()
}

fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

#[component]
fn NotesApp() -> impl IntoView {
    let draft = create_rw_signal(String::new());

    view! {
        <div class="app-surface app-notes">
            <textarea
                class="notes-editor"
                placeholder="Jot something down..."
                prop:value=move || draft.get()
                on:input=move |ev| draft.set(event_target_value(&ev))
            ></textarea>
            <div class="app-statusbar">
                <span>{move || draft.with(|text| format!("{} words", word_count(text)))}</span>
                <span>{move || draft.with(|text| format!("{} characters", text.chars().count()))}</span>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn word_count_ignores_extra_whitespace() {
        assert_eq!(word_count(""), 0);
        assert_eq!(word_count("  one \n two\tthree  "), 3);
    }
}
