use clap::Parser;
use salary_inflation::{app, config, logging};

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 CLI 애플리케이션을 실행한다.
fn main() {
    logging::init();
    if let Err(err) = try_run() {
        eprintln!("Ошибка: {err}");
        std::process::exit(1);
    }
}

fn try_run() -> Result<(), app::AppError> {
    let args = app::CliArgs::parse();
    let cfg = config::load_or_default()?;
    app::run(&cfg, &args)
}
