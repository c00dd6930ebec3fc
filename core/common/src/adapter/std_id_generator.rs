//! IdGenerator の標準実装（UUID v4）

use crate::ports::outbound::IdGenerator;

/// ランダムな UUID v4 を小文字ハイフン区切りで返す
#[derive(Debug, Clone, Default)]
pub struct StdIdGenerator;

impl IdGenerator for StdIdGenerator {
    fn next_token(&self) -> String {
        uuid::Uuid::new_v4().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_are_uuid_and_unique() {
        let g = StdIdGenerator;
        let a = g.next_token();
        let b = g.next_token();
        assert_ne!(a, b);
        assert!(uuid::Uuid::parse_str(&a).is_ok());
        assert_eq!(a, a.to_lowercase());
    }
}
