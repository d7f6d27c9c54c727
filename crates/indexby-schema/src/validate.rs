use crate::{MAX_ATTRIBUTE_NAME_LEN, node::SchemaError};

/// Validate one attribute identifier against the naming rules shared with
/// the host schema system: non-empty, bounded length, lowercase snake case
/// starting with a letter.
pub fn validate_ident(ident: &str, position: usize) -> Result<(), SchemaError> {
    if ident.is_empty() {
        return Err(SchemaError::EmptyIdent { position });
    }

    if ident.len() > MAX_ATTRIBUTE_NAME_LEN {
        return Err(SchemaError::IdentTooLong {
            ident: ident.to_string(),
        });
    }

    let mut chars = ident.chars();
    let leading_ok = chars.next().is_some_and(|c| c.is_ascii_lowercase());
    let rest_ok = chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_');

    if !(leading_ok && rest_ok) {
        return Err(SchemaError::InvalidIdent {
            ident: ident.to_string(),
        });
    }

    Ok(())
}
