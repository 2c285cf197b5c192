use clap::Parser;
use pdf_image_mapper::{apply, catalog, cli, config, error, logger, mapper, review, scanner};
use cli::{Cli, Commands};
use config::Config;
use error::Result;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    logger::init_logger(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("エラー: {}", e);
            ExitCode::from(e.exit_code())
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::load()?;

    match cli.command {
        Commands::Map { catalog, pages, images, output } => {
            let catalog = catalog.unwrap_or_else(|| config.catalog_path.clone());
            let pages = pages.unwrap_or_else(|| config.page_text_path.clone());
            let images = images.unwrap_or_else(|| config.extracted_dir.clone());
            let output = output.unwrap_or_else(|| config.mapping_file.clone());

            println!("🔗 image-map - 製品ID自動割当\n");
            println!("[1/2] カタログ・ページテキスト・画像を照合中...");
            let outcome = mapper::create_mapping(&catalog, &pages, &images, &output)?;

            for line in outcome.decisions.iter().filter_map(mapper::format_decision_line) {
                println!("{}", line);
            }

            println!("\n[2/2] 結果");
            println!("{}", mapper::format_summary(&outcome));
            println!("✔ マッピングを保存: {}", output.display());

            println!("\n次の手順:");
            println!("1. マッピングファイルを確認して誤りを修正（`image-map review` も使えます）");
            println!("2. `image-map apply` を実行");
        }

        Commands::Template { images, output, catalog } => {
            let images = images.unwrap_or_else(|| config.extracted_dir.clone());
            let output = output.unwrap_or_else(|| config.mapping_file.clone());
            let catalog = catalog.unwrap_or_else(|| config.catalog_path.clone());

            println!("📝 image-map - テンプレート作成\n");
            let files = scanner::scan_folder(&images)?;
            println!("✔ {}枚の画像を検出", files.len());

            let (document, skipped) = mapper::build_template(&files);
            if !skipped.is_empty() {
                println!("  対象外（命名規則外）: {}件", skipped.len());
            }
            mapper::save_mapping(&document, &output)?;
            println!("✔ テンプレートを保存: {}", output.display());
            println!("\nこのファイルを編集して画像に製品IDを割り当ててください:");
            println!("  \"page_003_img_01.png\": \"YC0018CA\",");

            let variant = catalog::CatalogVariant::ExcludingSuffix(config.excluded_suffix.clone());
            let ids = catalog::load_product_ids(&catalog, &variant)?;
            println!("\n{}", "=".repeat(50));
            println!("製品ID一覧（先頭{}件）:", config.preview_count);
            println!("{}", "=".repeat(50));
            for id in ids.iter().take(config.preview_count) {
                println!("  {}", id);
            }
            if ids.len() > config.preview_count {
                println!("  ... ほか{}件", ids.len() - config.preview_count);
            }
        }

        Commands::Apply { mapping, images, dest } => {
            let mapping = mapping.unwrap_or_else(|| config.mapping_file.clone());
            let images = images.unwrap_or_else(|| config.extracted_dir.clone());
            let dest = dest.unwrap_or_else(|| config.products_dir.clone());

            println!("📦 image-map - マッピング適用\n");
            let document = mapper::load_mapping(&mapping)?;
            let report = apply::apply_mapping(&document, &images, &dest)?;

            for entry in &report.entries {
                match &entry.outcome {
                    apply::ApplyOutcome::Copied { target } => {
                        println!("  ✓ {} -> {}", entry.file_name, target)
                    }
                    apply::ApplyOutcome::Unchanged { target } => {
                        println!("  = {} -> {} (変更なし)", entry.file_name, target)
                    }
                    apply::ApplyOutcome::Skipped(_) => {}
                }
            }
            for (file_name, reason) in report.warnings() {
                println!("  ⚠ {}: {}", file_name, reason);
            }

            let skipped = report.skipped().count();
            println!("\n✔ {}枚の画像を出力（スキップ {}件）", report.materialized(), skipped);
            println!("✔ 出力先: {}", report.products_dir.display());
        }

        Commands::Review { mapping, output, catalog } => {
            let mapping = mapping.unwrap_or_else(|| config.mapping_file.clone());
            let known = match catalog {
                Some(path) => Some(catalog::load_product_ids(&path, &catalog::CatalogVariant::All)?),
                None => None,
            };

            println!("🔎 image-map - マッピング確認\n");
            review::run_interactive_review(&mapping, output.as_deref(), known.as_deref())?;
        }

        Commands::Config { show, init } => {
            if init {
                let path = Config::default().save()?;
                println!("✔ 設定ファイルを作成しました: {}", path.display());
            }

            if show || !init {
                println!("設定:");
                println!("  カタログ: {}", config.catalog_path.display());
                println!("  ページテキスト: {}", config.page_text_path.display());
                println!("  抽出画像: {}", config.extracted_dir.display());
                println!("  製品画像: {}", config.products_dir.display());
                println!("  マッピング: {}", config.mapping_file.display());
                println!("  除外接尾辞: {}", config.excluded_suffix);
                println!("  候補表示数: {}", config.preview_count);
            }
        }
    }

    Ok(())
}
