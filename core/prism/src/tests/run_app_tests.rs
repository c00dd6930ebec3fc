//! Runner 経由のディスパッチのテスト（Command から終了コードまで）

use super::{ScriptedPrompt, TestEnv};
use crate::domain::command::Command;
use crate::ports::inbound::UseCaseRunner;
use crate::Runner;
use common::error::Error;

fn runner(env: TestEnv) -> (Runner, tempfile::TempDir) {
    (Runner { app: env.app }, env.tmp)
}

#[test]
fn test_dispatch_create_and_list() {
    let (runner, _tmp) = runner(TestEnv::new());
    let code = runner
        .run(Command::Create {
            input: Some("Mail".to_string()),
        })
        .unwrap();
    assert_eq!(code, 0);
    assert_eq!(
        runner
            .run(Command::List {
                query: String::new()
            })
            .unwrap(),
        0
    );
}

#[test]
fn test_dispatch_error_maps_to_exit_code() {
    let (runner, _tmp) = runner(TestEnv::with_prompt(ScriptedPrompt::confirming(true)));
    let err = runner
        .run(Command::Delete {
            key: "ghost".to_string(),
        })
        .unwrap_err();
    assert!(matches!(err, Error::NotFound(_)));
    assert_eq!(err.exit_code(), 66);
}
