use crate::terminal::StyleId;

pub(crate) const ASCII_ART: &str = r#"
       ┌─────────────────────────────┐
       │  ⊨  t a r s k i   0 . 1  ⊨  │
       └─────────────────────────────┘
"#;
pub(crate) const STYLE_LOGO: StyleId = 0;
pub(crate) const STYLE_INFO: StyleId = 1;
pub(crate) const STYLE_THEORY: StyleId = 2;
pub(crate) const STYLE_MODEL_UNIVERSE: StyleId = 3;
pub(crate) const STYLE_PASS: StyleId = 4;
pub(crate) const STYLE_FAIL: StyleId = 5;

pub(crate) const DEFAULT_MAX_SIZE: u32 = 3;
