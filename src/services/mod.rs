// src/services/mod.rs
pub mod category_service;
pub mod customer_service;
pub mod game_service;
pub mod pricing;
pub mod rental_service;

/// Padrão `LIKE` para "começa por `prefix`", com `%`, `_` e `\` escapados
/// (usar com `ESCAPE '\'`).
pub(crate) fn like_prefix(prefix: &str) -> String {
    let mut pattern = String::with_capacity(prefix.len() + 1);
    for c in prefix.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}
