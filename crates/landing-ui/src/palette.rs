use strum_macros::{AsRefStr, Display, EnumIter};

/// Design tokens the indicator can be painted with. The token names are the
/// contract with the stylesheet: `bg-{token}` utilities and `--{token}` vars.
#[derive(AsRefStr, Clone, Copy, Debug, Display, EnumIter, PartialEq, Eq)]
#[strum(serialize_all = "lowercase")]
pub enum ColorToken {
    Success,
    Error,
}

impl ColorToken {
    pub fn bg_class(&self) -> String {
        format!("bg-{}", self.as_ref())
    }

    pub fn css_var(&self) -> String {
        format!("var(--{})", self.as_ref())
    }
}

pub fn indicator_color(is_success: bool) -> ColorToken {
    if is_success {
        ColorToken::Success
    } else {
        ColorToken::Error
    }
}
