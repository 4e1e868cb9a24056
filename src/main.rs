use anyhow::Context;
use clap::Parser;
use material_match::{cli, config, export, loader, query};
use cli::{Cli, Commands};
use config::Config;
use query::QueryOutcome;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    let config = Config::load().context("設定ファイルの読み込みに失敗")?;

    match cli.command {
        Commands::Run { demand, store, output, format, columns } => {
            println!("🔎 material-match - 材料照合\n");

            for path in [&demand, &store] {
                let name = path.file_name().map(|n| n.to_string_lossy()).unwrap_or_default();
                if !loader::allowed_file(&name) {
                    tracing::warn!("想定外の拡張子です: {}", path.display());
                }
            }

            let columns = columns.apply(&config.columns);
            let output_dir = output.unwrap_or_else(|| config.output_dir.clone());
            let formats = format.formats();

            for (i, fmt) in formats.iter().enumerate() {
                println!("[{}/{}] {}形式で照合中...", i + 1, formats.len(), fmt);
                let output_path = export::default_output_path(&output_dir, *fmt);

                match query::match_materials(&demand, &store, &output_path, *fmt, &columns) {
                    QueryOutcome::Written(path) => {
                        println!("✔ 結果を保存: {}\n", path.display());
                    }
                    QueryOutcome::NotFound => {
                        println!("ℹ {}", QueryOutcome::NotFound.message());
                        return Ok(());
                    }
                    QueryOutcome::Failed(e) => {
                        eprintln!("✖ 処理中にエラーが発生しました");
                        return Err(e.into());
                    }
                }
            }

            println!("✅ 照合完了");
        }

        Commands::Show { file } => {
            let records = export::csv::read_results(&file)
                .with_context(|| format!("結果ファイルを読み込めません: {}", file.display()))?;

            println!("照合結果: {}件\n", records.len());
            println!("順序\t材料\t取引先\t金額\t摘要");
            for r in &records {
                println!(
                    "{}\t{}\t{}\t{}\t{}",
                    r.order, r.material, r.counterparty, r.amount, r.summary
                );
            }
        }

        Commands::Config { show, reset, upload_dir, output_dir, columns } => {
            let mut config = if reset { Config::default() } else { config };
            let changed = reset || upload_dir.is_some() || output_dir.is_some() || !columns.is_empty();

            if let Some(dir) = upload_dir {
                config.upload_dir = dir;
            }
            if let Some(dir) = output_dir {
                config.output_dir = dir;
            }
            config.columns = columns.apply(&config.columns);

            if changed {
                config.save()?;
                println!("✔ 設定を保存しました");
            }

            if show || !changed {
                println!("設定:");
                println!("  受け取りディレクトリ: {}", config.upload_dir.display());
                println!("  出力ディレクトリ: {}", config.output_dir.display());
                println!("  材料列: {}", config.columns.material);
                println!("  摘要列: {}", config.columns.summary);
                println!("  取引先列: {}", config.columns.counterparty);
                println!("  金額列: {}", config.columns.amount);
            }
        }

        Commands::Init => {
            let created = config.ensure_directories()?;
            if created.is_empty() {
                println!("ディレクトリは作成済みです");
            }
            for dir in created {
                println!("✔ ディレクトリを作成: {}", dir.display());
            }
        }
    }

    Ok(())
}

fn setup_logging(verbosity: u8) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let level = match verbosity {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into());

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}
