// src/models/validation.rs
//! Regras de validação partilhadas pelos payloads (`#[validate(custom(...))]`).
use std::borrow::Cow;
use validator::{ValidationError, ValidationErrors, ValidationErrorsKind};

fn invalid(code: &'static str, message: &'static str) -> ValidationError {
    ValidationError::new(code).with_message(Cow::Borrowed(message))
}

/// Nome não vazio que começa por uma letra (acentuadas incluídas).
pub fn validate_name(value: &str) -> Result<(), ValidationError> {
    match value.trim().chars().next() {
        Some(c) if c.is_alphabetic() => Ok(()),
        Some(_) => Err(invalid("name", "name deve começar por uma letra")),
        None => Err(invalid("name", "name é obrigatório")),
    }
}

/// Apenas não vazio; nomes de categoria podem começar por dígitos ("4X").
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(invalid("name", "name é obrigatório"))
    } else {
        Ok(())
    }
}

/// Telefone com 10 ou 11 dígitos.
pub fn validate_phone(value: &str) -> Result<(), ValidationError> {
    if is_digits(value) && (10..=11).contains(&value.len()) {
        Ok(())
    } else {
        Err(invalid("phone", "phone deve ter 10 ou 11 dígitos"))
    }
}

/// CPF com exatamente 11 dígitos (sem verificação dos dígitos de controlo).
pub fn validate_cpf(value: &str) -> Result<(), ValidationError> {
    if is_digits(value) && value.len() == 11 {
        Ok(())
    } else {
        Err(invalid("cpf", "cpf deve ter exatamente 11 dígitos"))
    }
}

fn is_digits(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())
}

/// Achata os erros do `validator` numa lista ordenada de mensagens.
pub fn error_messages(errors: &ValidationErrors) -> Vec<String> {
    let mut messages = Vec::new();
    collect_messages(errors, "", &mut messages);
    messages.sort();
    messages
}

fn collect_messages(errors: &ValidationErrors, prefix: &str, out: &mut Vec<String>) {
    for (field, kind) in errors.errors() {
        let path = if prefix.is_empty() {
            field.to_string()
        } else {
            format!("{prefix}.{field}")
        };
        match kind {
            ValidationErrorsKind::Field(field_errors) => {
                for error in field_errors {
                    match &error.message {
                        Some(message) => out.push(message.to_string()),
                        None => out.push(format!("{path} é inválido ({})", error.code)),
                    }
                }
            }
            ValidationErrorsKind::Struct(inner) => collect_messages(inner, &path, out),
            ValidationErrorsKind::List(items) => {
                for (index, inner) in items {
                    collect_messages(inner, &format!("{path}[{index}]"), out);
                }
            }
        }
    }
}
