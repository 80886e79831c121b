mod create_alias;
mod delete_alias;
mod get_aliases;

pub use create_alias::CreateAliasUseCase;
pub use delete_alias::DeleteAliasUseCase;
pub use get_aliases::GetAliasesUseCase;
