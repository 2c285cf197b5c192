use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "image-map")]
#[command(about = "PDF抽出画像の製品ID割当・リネームツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// ページテキストから製品IDを自動割当してマッピングを作成
    Map {
        /// 製品カタログ（JSON/Excel）
        #[arg(short, long)]
        catalog: Option<PathBuf>,

        /// ページテキストJSON（ページ番号 → 本文）
        #[arg(short, long)]
        pages: Option<PathBuf>,

        /// 抽出画像フォルダ
        #[arg(short, long)]
        images: Option<PathBuf>,

        /// 出力マッピングファイル
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// 手動編集用のマッピングテンプレートを作成
    Template {
        /// 抽出画像フォルダ
        #[arg(short, long)]
        images: Option<PathBuf>,

        /// 出力マッピングファイル
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// 候補一覧に使う製品カタログ（JSON/Excel）
        #[arg(short, long)]
        catalog: Option<PathBuf>,
    },

    /// マッピングに従って画像を製品IDでコピー
    Apply {
        /// マッピングファイル
        #[arg(short, long)]
        mapping: Option<PathBuf>,

        /// 抽出画像フォルダ
        #[arg(short, long)]
        images: Option<PathBuf>,

        /// コピー先フォルダ
        #[arg(short, long)]
        dest: Option<PathBuf>,
    },

    /// 要確認エントリを対話的に修正
    Review {
        /// マッピングファイル
        #[arg(short, long)]
        mapping: Option<PathBuf>,

        /// 出力先（省略時は上書き）
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// 入力チェックに使う製品カタログ
        #[arg(short, long)]
        catalog: Option<PathBuf>,
    },

    /// 設定を表示/初期化
    Config {
        /// 設定を表示
        #[arg(long)]
        show: bool,

        /// 既定値で設定ファイルを作成
        #[arg(long)]
        init: bool,
    },
}
