use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::i18n::{load_language, save_language, Language};
use crate::store::StorageBackend;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LanguageAction {
    Show,
    Set(Language),
    Toggle,
}

pub fn run<B: StorageBackend>(backend: &B, action: LanguageAction) -> Result<CmdResult> {
    let current = load_language(backend);
    let next = match action {
        LanguageAction::Show => return Ok(CmdResult::default().with_language(current)),
        LanguageAction::Set(language) => language,
        LanguageAction::Toggle => current.toggled(),
    };

    save_language(backend, next)?;
    let mut result = CmdResult::default().with_language(next);
    result.add_message(CmdMessage::success(format!("Language set to {}", next)));
    Ok(result)
}
