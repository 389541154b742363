use super::tree::{RollResult, RolledTerm};

/// Renders a [RollResult] as text.
///
/// The default methods produce the breakdown format, `(3 + 5) - (2) = 6`;
/// implementors override the pieces they want to change.
pub trait Stringify {
    fn stringify(&mut self, roll: &RollResult) -> String {
        self.str_roll(roll)
    }

    fn str_roll(&mut self, roll: &RollResult) -> String {
        format!("{} = {}", self.breakdown(roll), roll.total())
    }

    fn breakdown(&mut self, roll: &RollResult) -> String {
        let mut ret = String::new();
        for (i, term) in roll.terms().iter().enumerate() {
            if i > 0 {
                ret.push_str(&format!(" {} ", term.sign));
            } else if term.sign.is_negative() {
                ret.push_str(&term.sign.to_string());
            }
            ret.push_str(&self.str_term(term));
        }
        ret
    }

    fn str_term(&mut self, term: &RolledTerm) -> String {
        let values = term
            .values
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" + ");
        format!("({})", values)
    }
}

#[derive(Default)]
pub struct SimpleStringifier;

impl SimpleStringifier {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Stringify for SimpleStringifier {}

/// Prefixes the rendered roll with a label, usually the notation it was
/// rolled from: `1d6 + 2 = (4) + (2) = 6`.
pub struct LabeledStringifier<'a> {
    label: &'a str,
}

impl<'a> LabeledStringifier<'a> {
    pub fn new(label: &'a str) -> Self {
        Self { label }
    }
}

impl Stringify for LabeledStringifier<'_> {
    fn str_roll(&mut self, roll: &RollResult) -> String {
        let breakdown = self.breakdown(roll);
        format!("{} = {} = {}", self.label, breakdown, roll.total())
    }
}
