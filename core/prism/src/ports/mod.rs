//! Ports & Adapters のポート定義
//!
//! - inbound: ドライバ（CLI）がアプリを呼び出すインターフェース
//! - outbound: prism の永続化・対話・起動・あいまい検索の trait（common の FileSystem / Process も利用）

pub mod inbound;
pub mod outbound;
