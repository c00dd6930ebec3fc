//! 識別子生成 Outbound ポート
//!
//! usecase は IdGenerator を注入し、テストでは固定 ID を返す実装を渡せる。

/// 不透明なトークン（prism の恒久識別子）を生成する抽象（Outbound ポート）
pub trait IdGenerator: Send + Sync {
    fn next_token(&self) -> String;
}
