use crate::epicor::users::error::{Result, SyncError};
use crate::epicor::users::model::{Employee, UserId};

/// Derives the ERP user identifier for an employee: the first character of
/// the first name followed by the last name, lowercased.
///
/// An empty first name has no initial and is rejected rather than producing
/// an identifier made of the last name alone.
pub fn derive_user_id(employee: &Employee) -> Result<UserId> {
    let initial = employee
        .first_name
        .chars()
        .next()
        .ok_or_else(|| SyncError::EmptyFirstName {
            last_name: employee.last_name.clone(),
        })?;

    let mut id = String::with_capacity(initial.len_utf8() + employee.last_name.len());
    id.push(initial);
    id.push_str(&employee.last_name);
    Ok(id.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(first: &str, last: &str) -> UserId {
        derive_user_id(&Employee::new(first, last)).expect("user id")
    }

    #[test]
    fn takes_initial_and_last_name() {
        assert_eq!(id("Jane", "Doe"), "jdoe");
        assert_eq!(id("john", "SMITH"), "jsmith");
    }

    #[test]
    fn is_deterministic() {
        assert_eq!(id("Ada", "Lovelace"), id("Ada", "Lovelace"));
    }

    #[test]
    fn keeps_last_name_verbatim_apart_from_case() {
        assert_eq!(id("Mary", "O'Neil-Smith"), "mo'neil-smith");
    }

    #[test]
    fn initial_is_a_whole_character() {
        assert_eq!(id("Élodie", "Martin"), "émartin");
    }

    #[test]
    fn empty_first_name_is_rejected() {
        let error = derive_user_id(&Employee::new("", "Doe")).unwrap_err();
        assert!(matches!(error, SyncError::EmptyFirstName { ref last_name } if last_name == "Doe"));
    }
}
