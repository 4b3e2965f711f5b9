use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use tectonic_report::{
    ContentStore, CountingViewport, DirContentSource, HistoryAdapter, InputEvent, Key, Language,
    LocaleContent, MemoryHistory, NavIntent, Preferences, Progress, ReportSession, SceneData,
    SceneNav, SceneProps, SceneRenderer, SessionOpts, Theme, TimelineItem, VirtualTimeline,
    ViewportSize,
};

#[derive(Parser, Debug)]
#[command(name = "tectonic-report", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the flattened card sequence for a language.
    Timeline(ContentArgs),
    /// Evaluate the landing animation at one progress value and print it as JSON.
    Sample(SampleArgs),
    /// Replay navigation operations from an initial hash and print each resulting state.
    Navigate(NavigateArgs),
    /// Fetch a link preview and print it as JSON.
    #[cfg(feature = "http-preview")]
    Preview(PreviewArgs),
}

#[derive(Parser, Debug)]
struct ContentArgs {
    /// Directory holding `<lang>.json` locale files.
    #[arg(long)]
    content: PathBuf,

    /// Language code.
    #[arg(long, default_value = "en", value_parser = parse_language)]
    lang: Language,
}

#[derive(Parser, Debug)]
struct SampleArgs {
    /// Scroll progress through the landing, `0..=1`.
    #[arg(long)]
    progress: f64,

    /// Color theme.
    #[arg(long, value_enum, default_value_t = ThemeChoice::Dark)]
    theme: ThemeChoice,

    /// Pointer x in viewport pixels.
    #[arg(long)]
    pointer_x: Option<f64>,

    /// Pointer y in viewport pixels.
    #[arg(long)]
    pointer_y: Option<f64>,

    /// Frames to run so parallax can settle.
    #[arg(long, default_value_t = 1)]
    frames: u32,
}

#[derive(Parser, Debug)]
struct NavigateArgs {
    #[command(flatten)]
    content: ContentArgs,

    /// Initial URL hash, e.g. `#shift-03`.
    #[arg(long, default_value = "")]
    hash: String,

    /// Comma-separated operations: `next`, `prev`, `back`, `open`, `conclusion`,
    /// `jump:<slug>`, `key:<DOM key>`, `history-back`, `history-forward`, `hash:<slug>`.
    #[arg(long, value_delimiter = ',')]
    ops: Vec<String>,
}

#[cfg(feature = "http-preview")]
#[derive(Parser, Debug)]
struct PreviewArgs {
    /// Page to preview.
    #[arg(long)]
    url: String,

    /// Give up after this many milliseconds.
    #[arg(long, default_value_t = 5000)]
    timeout_ms: u64,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ThemeChoice {
    Dark,
    Light,
}

impl From<ThemeChoice> for Theme {
    fn from(c: ThemeChoice) -> Self {
        match c {
            ThemeChoice::Dark => Theme::Dark,
            ThemeChoice::Light => Theme::Light,
        }
    }
}

const VIEWPORT: (f64, f64) = (1280.0, 800.0);

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Timeline(args) => cmd_timeline(args),
        Command::Sample(args) => cmd_sample(args),
        Command::Navigate(args) => cmd_navigate(args),
        #[cfg(feature = "http-preview")]
        Command::Preview(args) => cmd_preview(args),
    }
}

fn parse_language(s: &str) -> Result<Language, String> {
    Language::new(s).map_err(|e| e.to_string())
}

fn load_content(args: &ContentArgs) -> anyhow::Result<LocaleContent> {
    let mut store = ContentStore::new(DirContentSource::new(&args.content), Language::default());
    let content = store
        .get(&args.lang)
        .with_context(|| format!("load content from '{}'", args.content.display()))?;
    Ok(LocaleContent::clone(&content))
}

fn cmd_timeline(args: ContentArgs) -> anyhow::Result<()> {
    let content = load_content(&args)?;
    let timeline = VirtualTimeline::from_content(&content);
    for (i, item) in timeline.iter().enumerate() {
        println!(
            "{}\t#{}\t{}\t{}",
            timeline.position_label(i),
            item.slug(),
            kind_of(item),
            item.title()
        );
    }
    Ok(())
}

fn cmd_sample(args: SampleArgs) -> anyhow::Result<()> {
    let prefs = Preferences {
        theme: args.theme.into(),
        ..Preferences::default()
    };
    let viewport = ViewportSize::new(VIEWPORT.0, VIEWPORT.1)?;
    let mut session = ReportSession::new(
        &LocaleContent::default(),
        prefs,
        MemoryHistory::new("main"),
        CountingViewport::default(),
        viewport,
        SessionOpts::default(),
    )?;

    let end = (SessionOpts::default().landing_screens - 1.0) * viewport.height;
    let progress = Progress::new(args.progress);
    session.handle(InputEvent::Scroll {
        offset: progress.get() * end,
    });
    if let (Some(x), Some(y)) = (args.pointer_x, args.pointer_y) {
        session.pointer_move(x, y);
    }

    let mut frame = None;
    for _ in 0..args.frames.max(1) {
        let ticket = session.request_frame();
        frame = session.tick(ticket);
    }
    let frame = frame.context("landing frame was not produced")?;

    let out = serde_json::json!({
        "progress": frame.sample.progress,
        "active_phases": session.landing().active_phases(frame.sample.progress),
        "tracks": frame.tracks,
        "styles": frame.styles,
    });
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}

fn cmd_navigate(args: NavigateArgs) -> anyhow::Result<()> {
    let content = load_content(&args.content)?;
    let prefs = Preferences {
        language: args.content.lang.clone(),
        ..Preferences::default()
    };
    let mut session = ReportSession::new(
        &content,
        prefs,
        MemoryHistory::new(args.hash.as_str()),
        CountingViewport::default(),
        ViewportSize::new(VIEWPORT.0, VIEWPORT.1)?,
        SessionOpts::default(),
    )?;
    let mut scene = TextScene::default();

    print_step("start", &mut session, &mut scene);
    for op in &args.ops {
        let op = op.trim();
        match op.split_once(':') {
            Some(("jump", slug)) => {
                session.jump(slug);
            }
            Some(("key", key)) => {
                let key = Key::from_dom(key).with_context(|| format!("unknown key '{key}'"))?;
                session.handle(InputEvent::Key { key, shift: false });
            }
            Some(("hash", slug)) => {
                session.history_mut().edit_hash(slug);
                session.sync_history();
            }
            _ => match op {
                "next" => {
                    session.navigate(NavIntent::Next);
                }
                "prev" => {
                    session.navigate(NavIntent::Prev);
                }
                "back" => {
                    session.navigate(NavIntent::Back);
                }
                "open" => {
                    session.handle(InputEvent::Key {
                        key: Key::Enter,
                        shift: false,
                    });
                }
                "conclusion" => {
                    session.jump(tectonic_report::SLUG_CONCLUSION);
                }
                "history-back" => {
                    session.history_mut().back();
                    session.sync_history();
                }
                "history-forward" => {
                    session.history_mut().forward();
                    session.sync_history();
                }
                other => anyhow::bail!("unknown operation '{other}'"),
            },
        }
        print_step(op, &mut session, &mut scene);
    }
    Ok(())
}

fn print_step(
    op: &str,
    session: &mut ReportSession<MemoryHistory, CountingViewport>,
    scene: &mut TextScene,
) {
    session.render_with(scene, None);
    println!(
        "{op}\t{:?}\t#{}\t{}",
        session.state(),
        session.router().history().slug(),
        scene.line
    );
}

#[derive(Default)]
struct TextScene {
    line: String,
}

impl SceneRenderer for TextScene {
    fn render(&mut self, props: &SceneProps<'_>, _nav: &mut SceneNav) {
        self.line = match props.data {
            SceneData::Loading => "loading".to_owned(),
            SceneData::Landing => "landing".to_owned(),
            SceneData::Item(item) => format!(
                "{} {} [{}]",
                kind_of(item),
                item.title(),
                props.position.as_deref().unwrap_or("-")
            ),
            SceneData::Conclusion => "conclusion".to_owned(),
            SceneData::ThankYou => "thank you".to_owned(),
        };
    }
}

fn kind_of(item: &TimelineItem) -> &'static str {
    match item {
        TimelineItem::Layer(_) => "layer",
        TimelineItem::Shift(_) => "shift",
        TimelineItem::Summary(_) => "summary",
    }
}

#[cfg(feature = "http-preview")]
fn cmd_preview(args: PreviewArgs) -> anyhow::Result<()> {
    use std::time::Duration;

    let timeout = Duration::from_millis(args.timeout_ms);
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("build tokio runtime")?;
    let fetcher = tectonic_report::HttpPreviewFetcher::new(timeout)?;
    let cache = tectonic_report::PreviewCache::with_timeout(fetcher, timeout);
    let state = rt.block_on(cache.get(&args.url));
    println!("{}", serde_json::to_string_pretty(&state)?);
    Ok(())
}
