//! 配線: 標準アダプタで UseCase を組み立てる

use std::io::IsTerminal;
use std::sync::Arc;

use common::adapter::{
    FileJsonLog, NoopLog, StderrLog, StdEnvResolver, StdFileSystem, StdIdGenerator, StdProcess,
    TeeLog,
};
use common::error::Error;
use common::ports::outbound::{
    DirOverrides, EnvResolver, FileSystem, IdGenerator, Log, Process,
};

use crate::adapter::{
    load_settings, CliPrompt, FsPrismRepository, OpenLauncher, OsascriptPrompt, SkimFuzzyFilter,
};
use crate::domain::{PrismContext, PrismLayout};
use crate::ports::outbound::{FuzzyFilter, Launcher, PrismRepository, UserPrompt};
use crate::usecase::{
    CreateUseCase, DeleteUseCase, EditUseCase, ListUseCase, RenameUseCase, StartUseCase,
};

/// 配線で組み立てたユースケース群（main の Command ディスパッチで利用）
pub struct App {
    pub list_use_case: ListUseCase,
    pub create_use_case: Arc<CreateUseCase>,
    pub edit_use_case: EditUseCase,
    pub rename_use_case: RenameUseCase,
    pub delete_use_case: DeleteUseCase,
    pub start_use_case: StartUseCase,
    /// 構造化ログ（ファイルへ JSONL、-v なら stderr にも）
    pub logger: Arc<dyn Log>,
}

/// 外界とつながるポート一式（テストでは差し替える）
pub struct Ports {
    pub fs: Arc<dyn FileSystem>,
    pub id_gen: Arc<dyn IdGenerator>,
    pub prompt: Arc<dyn UserPrompt>,
    pub launcher: Arc<dyn Launcher>,
    pub fuzzy: Arc<dyn FuzzyFilter>,
    pub logger: Arc<dyn Log>,
}

/// ポートと文脈から App を組み立てる
pub fn assemble(ports: Ports, ctx: PrismContext) -> App {
    let repo: Arc<dyn PrismRepository> = Arc::new(FsPrismRepository::new(
        Arc::clone(&ports.fs),
        Arc::clone(&ports.id_gen),
        Arc::clone(&ports.logger),
        ctx,
    ));
    let create_use_case = Arc::new(CreateUseCase::new(
        Arc::clone(&repo),
        Arc::clone(&ports.prompt),
        Arc::clone(&ports.logger),
    ));
    App {
        list_use_case: ListUseCase::new(Arc::clone(&repo), Arc::clone(&ports.fuzzy)),
        edit_use_case: EditUseCase::new(
            Arc::clone(&repo),
            Arc::clone(&ports.fs),
            Arc::clone(&ports.launcher),
            Arc::clone(&ports.logger),
        ),
        rename_use_case: RenameUseCase::new(
            Arc::clone(&repo),
            Arc::clone(&ports.prompt),
            Arc::clone(&ports.logger),
        ),
        delete_use_case: DeleteUseCase::new(
            Arc::clone(&repo),
            Arc::clone(&ports.prompt),
            Arc::clone(&ports.logger),
        ),
        start_use_case: StartUseCase::new(
            Arc::clone(&repo),
            Arc::clone(&ports.launcher),
            Arc::clone(&ports.prompt),
            Arc::clone(&create_use_case),
            Arc::clone(&ports.logger),
        ),
        create_use_case,
        logger: ports.logger,
    }
}

/// 配線: 標準アダプタで App を組み立てる
///
/// data / cache ディレクトリはここで作成しておく（以降のコマンドは存在を前提にしてよい）。
pub fn wire_prism(overrides: &DirOverrides, verbose: bool) -> Result<App, Error> {
    let fs: Arc<dyn FileSystem> = Arc::new(StdFileSystem);
    let env_resolver: Arc<dyn EnvResolver> = Arc::new(StdEnvResolver);
    let process: Arc<dyn Process> = Arc::new(StdProcess);

    let dirs = env_resolver.resolve_dirs(overrides)?;
    fs.create_dir_all(&dirs.data_dir)?;
    fs.create_dir_all(&dirs.cache_dir)?;

    let file_log: Arc<dyn Log> = match fs.create_dir_all(&dirs.logs_dir()) {
        Ok(()) => Arc::new(FileJsonLog::new(Arc::clone(&fs), dirs.log_file())),
        Err(_) => Arc::new(NoopLog),
    };
    let logger: Arc<dyn Log> = if verbose {
        Arc::new(TeeLog::new(vec![file_log, Arc::new(StderrLog) as Arc<dyn Log>]))
    } else {
        file_log
    };

    let settings = load_settings(fs.as_ref(), env_resolver.as_ref(), &dirs.settings_file())?;
    let ctx = PrismContext {
        layout: PrismLayout::new(dirs.data_dir.clone(), dirs.cache_dir.clone()),
        settings,
    };

    // 端末から呼ばれたら stdin で、ランチャーから呼ばれたらダイアログで聞く
    let prompt: Arc<dyn UserPrompt> = if std::io::stdin().is_terminal() {
        Arc::new(CliPrompt::stdio())
    } else {
        Arc::new(OsascriptPrompt::new(Arc::clone(&process)))
    };

    Ok(assemble(
        Ports {
            fs,
            id_gen: Arc::new(StdIdGenerator),
            prompt,
            launcher: Arc::new(OpenLauncher::new(process)),
            fuzzy: Arc::new(SkimFuzzyFilter::new()),
            logger,
        },
        ctx,
    ))
}
