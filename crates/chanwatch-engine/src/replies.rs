//! Chat replies sent back to whoever issued a command

use chanwatch_core::{ExError, ExErrorKind, StoreKind};

/// Confirmation for a successful add, listing the values as the user gave them
pub fn add_confirmation(store: StoreKind, keyword: &str, values: &[String]) -> String {
    let values = values.join(", ");
    match store {
        StoreKind::Primary => format!("Ключ '{}' добавлен с значениями: {}.", keyword, values),
        StoreKind::Secondary => format!(
            "Во второй словарь добавлен ключ '{}' с значениями: {}.",
            keyword, values
        ),
    }
}

/// Usage line for the add command of a store
pub fn usage(store: StoreKind) -> &'static str {
    match store {
        StoreKind::Primary => "/add_keyword <ключ> <значение1> <значение2> ...",
        StoreKind::Secondary => "/add_secondary_keyword <ключ> <значение1> <значение2> ...",
    }
}

/// Reply for a failed add command
pub fn error_reply(store: StoreKind, err: &ExError) -> String {
    match err.kind() {
        ExErrorKind::InvalidArgument => match err.keyword() {
            Some(keyword) => format!(
                "Пустые значения для ключа '{}' не допускаются. Использование: {}",
                keyword,
                usage(store)
            ),
            None => format!("Укажите ключ. Использование: {}", usage(store)),
        },
        kind if kind.is_storage() => match err.keyword() {
            Some(keyword) => format!(
                "Не удалось сохранить ключ '{}'. Изменения не применены.",
                keyword
            ),
            None => "Не удалось сохранить словарь. Изменения не применены.".to_string(),
        },
        _ => format!("Ошибка: {}", err.message()),
    }
}
