use async_graphql::SimpleObject;
use linkhop_core::{CreateOutcome, Shortcut};

#[derive(Debug, Clone, PartialEq, Eq, SimpleObject)]
#[graphql(name = "Shortcut")]
pub struct ShortcutObject {
    pub code: Option<String>,
    pub href: Option<String>,
}

impl From<Shortcut> for ShortcutObject {
    fn from(shortcut: Shortcut) -> Self {
        Self {
            code: Some(shortcut.code.into()),
            href: Some(shortcut.href),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, SimpleObject)]
#[graphql(name = "Result")]
pub struct CreateShortcutResult {
    pub ok: Option<bool>,
}

impl From<CreateOutcome> for CreateShortcutResult {
    fn from(outcome: CreateOutcome) -> Self {
        Self {
            ok: Some(outcome.ok),
        }
    }
}
