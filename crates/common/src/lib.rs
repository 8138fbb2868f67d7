pub mod types;
pub mod utils;
pub mod env;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_serializes_compact() {
        let m = types::Message { message: "hi" };
        assert_eq!(serde_json::to_string(&m).unwrap(), r#"{"message":"hi"}"#);
    }
}
