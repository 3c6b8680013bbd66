//! Standard calculator surface with a pure key-press engine.

use leptos::*;

const MAX_ENTRY_DIGITS: usize = 12;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum BinaryOp {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl BinaryOp {
    fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "−",
            Self::Multiply => "×",
            Self::Divide => "÷",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum CalcKey {
    Digit(char),
    Decimal,
    Binary(BinaryOp),
    Equals,
    ToggleSign,
    Percent,
    Clear,
}

/// Sequential left-to-right evaluation, no operator precedence.
#[derive(Clone, Debug, PartialEq)]
struct CalcEngine {
    entry: String,
    accumulator: Option<f64>,
    pending_op: Option<BinaryOp>,
    replace_entry: bool,
    error: bool,
}

impl Default for CalcEngine {
    fn default() -> Self {
        Self {
            entry: "0".to_string(),
            accumulator: None,
            pending_op: None,
            replace_entry: false,
            error: false,
        }
    }
}

impl CalcEngine {
    fn press(&mut self, key: CalcKey) {
        if self.error && key != CalcKey::Clear {
            // Any key after an error starts a fresh calculation.
            *self = Self::default();
        }
        match key {
            CalcKey::Digit(digit) => self.press_digit(digit),
            CalcKey::Decimal => self.press_decimal(),
            CalcKey::Binary(op) => self.press_op(op),
            CalcKey::Equals => self.press_equals(),
            CalcKey::ToggleSign => self.toggle_sign(),
            CalcKey::Percent => self.percent(),
            CalcKey::Clear => *self = Self::default(),
        }
    }

    fn display(&self) -> String {
        if self.error {
            "Error".to_string()
        } else {
            self.entry.clone()
        }
    }

    fn pending_symbol(&self) -> Option<&'static str> {
        self.pending_op.map(BinaryOp::symbol)
    }

    fn current_value(&self) -> f64 {
        self.entry.parse::<f64>().unwrap_or(0.0)
    }

    fn press_digit(&mut self, digit: char) {
        if self.replace_entry {
            self.entry = "0".to_string();
            self.replace_entry = false;
        }
        let digits = self.entry.chars().filter(char::is_ascii_digit).count();
        if digits >= MAX_ENTRY_DIGITS {
            return;
        }
        if self.entry == "0" {
            self.entry = digit.to_string();
        } else if self.entry == "-0" {
            self.entry = format!("-{digit}");
        } else {
            self.entry.push(digit);
        }
    }

    fn press_decimal(&mut self) {
        if self.replace_entry {
            self.entry = "0".to_string();
            self.replace_entry = false;
        }
        if !self.entry.contains('.') {
            self.entry.push('.');
        }
    }

    fn press_op(&mut self, op: BinaryOp) {
        let current = self.current_value();
        let base = match (self.accumulator, self.pending_op, self.replace_entry) {
            // Re-picking an operator before typing the right operand only
            // swaps the pending operator.
            (Some(acc), Some(_), true) => acc,
            (Some(acc), Some(pending), false) => match apply_binary(acc, pending, current) {
                Some(value) => value,
                None => {
                    self.set_error();
                    return;
                }
            },
            _ => current,
        };
        self.accumulator = Some(base);
        self.pending_op = Some(op);
        self.entry = format_number(base);
        self.replace_entry = true;
    }

    fn press_equals(&mut self) {
        let (Some(acc), Some(op)) = (self.accumulator, self.pending_op) else {
            return;
        };
        match apply_binary(acc, op, self.current_value()) {
            Some(result) => {
                self.entry = format_number(result);
                self.accumulator = None;
                self.pending_op = None;
                self.replace_entry = true;
            }
            None => self.set_error(),
        }
    }

    fn toggle_sign(&mut self) {
        if self.entry == "0" || self.entry == "0." {
            return;
        }
        if let Some(stripped) = self.entry.strip_prefix('-') {
            self.entry = stripped.to_string();
        } else {
            self.entry.insert(0, '-');
        }
    }

    fn percent(&mut self) {
        self.entry = format_number(self.current_value() / 100.0);
        self.replace_entry = true;
    }

    fn set_error(&mut self) {
        *self = Self::default();
        self.error = true;
    }
}

fn apply_binary(lhs: f64, op: BinaryOp, rhs: f64) -> Option<f64> {
    let result = match op {
        BinaryOp::Add => lhs + rhs,
        BinaryOp::Subtract => lhs - rhs,
        BinaryOp::Multiply => lhs * rhs,
        BinaryOp::Divide => {
            if rhs == 0.0 {
                return None;
            }
            lhs / rhs
        }
    };
    result.is_finite().then_some(result)
}

fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if value.fract() == 0.0 && value.abs() < 1e12 {
        return format!("{value:.0}");
    }
    let mut text = format!("{value:.9}");
    while text.contains('.') && text.ends_with('0') {
        text.pop();
    }
    if text.ends_with('.') {
        text.pop();
    }
    text
}

#[derive(Clone, Copy)]
struct CalcKeySpec {
    label: &'static str,
    class_name: &'static str,
    key: CalcKey,
}

const CALC_KEYS: [CalcKeySpec; 19] = [
    CalcKeySpec { label: "C", class_name: "calc-key-util", key: CalcKey::Clear },
    CalcKeySpec { label: "±", class_name: "calc-key-util", key: CalcKey::ToggleSign },
    CalcKeySpec { label: "%", class_name: "calc-key-util", key: CalcKey::Percent },
    CalcKeySpec { label: "÷", class_name: "calc-key-op", key: CalcKey::Binary(BinaryOp::Divide) },
    CalcKeySpec { label: "7", class_name: "calc-key-digit", key: CalcKey::Digit('7') },
    CalcKeySpec { label: "8", class_name: "calc-key-digit", key: CalcKey::Digit('8') },
    CalcKeySpec { label: "9", class_name: "calc-key-digit", key: CalcKey::Digit('9') },
    CalcKeySpec { label: "×", class_name: "calc-key-op", key: CalcKey::Binary(BinaryOp::Multiply) },
    CalcKeySpec { label: "4", class_name: "calc-key-digit", key: CalcKey::Digit('4') },
    CalcKeySpec { label: "5", class_name: "calc-key-digit", key: CalcKey::Digit('5') },
    CalcKeySpec { label: "6", class_name: "calc-key-digit", key: CalcKey::Digit('6') },
    CalcKeySpec { label: "−", class_name: "calc-key-op", key: CalcKey::Binary(BinaryOp::Subtract) },
    CalcKeySpec { label: "1", class_name: "calc-key-digit", key: CalcKey::Digit('1') },
    CalcKeySpec { label: "2", class_name: "calc-key-digit", key: CalcKey::Digit('2') },
    CalcKeySpec { label: "3", class_name: "calc-key-digit", key: CalcKey::Digit('3') },
    CalcKeySpec { label: "+", class_name: "calc-key-op", key: CalcKey::Binary(BinaryOp::Add) },
    CalcKeySpec { label: "0", class_name: "calc-key-digit calc-key-zero", key: CalcKey::Digit('0') },
    CalcKeySpec { label: ".", class_name: "calc-key-digit", key: CalcKey::Decimal },
    CalcKeySpec { label: "=", class_name: "calc-key-op", key: CalcKey::Equals },
];

pub(super) fn mount_calculator_app() -> View {
    view! { <CalculatorApp/> }.into_view()
}

#[component]
fn CalculatorApp() -> impl IntoView {
    let engine = create_rw_signal(CalcEngine::default());

    view! {
        <div class="app-surface app-calculator">
            <output class="calc-display" aria-live="polite">
                <span class="calc-pending">
                    {move || engine.with(|e| e.pending_symbol().unwrap_or(""))}
                </span>
                <span class="calc-entry">{move || engine.with(CalcEngine::display)}</span>
            </output>
            <div class="calc-keys">
                {CALC_KEYS
                    .iter()
                    .map(|spec| {
                        let key = spec.key;
                        view! {
                            <button
                                class=format!("calc-key {}", spec.class_name)
                                on:click=move |_| engine.update(|e| e.press(key))
                            >
                                {spec.label}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn press_all(engine: &mut CalcEngine, keys: &[CalcKey]) {
        for key in keys {
            engine.press(*key);
        }
    }

    fn enter_number(engine: &mut CalcEngine, text: &str) {
        for ch in text.chars() {
            match ch {
                '0'..='9' => engine.press(CalcKey::Digit(ch)),
                '.' => engine.press(CalcKey::Decimal),
                _ => panic!("unsupported test char: {ch}"),
            }
        }
    }

    #[test]
    fn default_display_is_zero() {
        assert_eq!(CalcEngine::default().display(), "0");
    }

    #[test]
    fn addition_evaluates_on_equals() {
        let mut engine = CalcEngine::default();
        enter_number(&mut engine, "12");
        engine.press(CalcKey::Binary(BinaryOp::Add));
        enter_number(&mut engine, "7.5");
        engine.press(CalcKey::Equals);
        assert_eq!(engine.display(), "19.5");
    }

    #[test]
    fn chained_operators_evaluate_left_to_right() {
        // 2 + 3 × 4 = 20 in sequential mode, not 14.
        let mut engine = CalcEngine::default();
        enter_number(&mut engine, "2");
        engine.press(CalcKey::Binary(BinaryOp::Add));
        enter_number(&mut engine, "3");
        engine.press(CalcKey::Binary(BinaryOp::Multiply));
        assert_eq!(engine.display(), "5");
        enter_number(&mut engine, "4");
        engine.press(CalcKey::Equals);
        assert_eq!(engine.display(), "20");
    }

    #[test]
    fn repicking_operator_before_operand_swaps_it() {
        let mut engine = CalcEngine::default();
        enter_number(&mut engine, "8");
        press_all(
            &mut engine,
            &[
                CalcKey::Binary(BinaryOp::Add),
                CalcKey::Binary(BinaryOp::Subtract),
            ],
        );
        enter_number(&mut engine, "3");
        engine.press(CalcKey::Equals);
        assert_eq!(engine.display(), "5");
    }

    #[test]
    fn divide_by_zero_shows_error_until_cleared() {
        let mut engine = CalcEngine::default();
        enter_number(&mut engine, "9");
        engine.press(CalcKey::Binary(BinaryOp::Divide));
        enter_number(&mut engine, "0");
        engine.press(CalcKey::Equals);
        assert_eq!(engine.display(), "Error");

        // Next digit starts over instead of appending to "Error".
        engine.press(CalcKey::Digit('4'));
        assert_eq!(engine.display(), "4");
    }

    #[test]
    fn toggle_sign_and_percent() {
        let mut engine = CalcEngine::default();
        enter_number(&mut engine, "50");
        engine.press(CalcKey::ToggleSign);
        assert_eq!(engine.display(), "-50");
        engine.press(CalcKey::ToggleSign);
        engine.press(CalcKey::Percent);
        assert_eq!(engine.display(), "0.5");
    }

    #[test]
    fn entry_length_is_capped() {
        let mut engine = CalcEngine::default();
        enter_number(&mut engine, "999999999999999");
        assert_eq!(engine.display().len(), MAX_ENTRY_DIGITS);
    }

    #[test]
    fn decimal_point_is_idempotent() {
        let mut engine = CalcEngine::default();
        press_all(
            &mut engine,
            &[CalcKey::Digit('1'), CalcKey::Decimal, CalcKey::Decimal],
        );
        enter_number(&mut engine, "5");
        assert_eq!(engine.display(), "1.5");
    }
}
