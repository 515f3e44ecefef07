use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use folio::{
    BookGallery, ContentStore, Fps, FrameDriven, FrameLoop, FrameRequest, GalleryState,
    MotionPath, Property, Rectangle, ScrollTracker, SiteConfig, clamp_step_count,
};
use tracing_subscriber::filter::LevelFilter;

#[derive(Parser, Debug)]
#[command(name = "folio", version)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace). Logs go to stderr.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the motion path between two rectangles.
    Path(PathArgs),
    /// Feed scroll offsets through the smoothed progress tracker.
    Scroll(ScrollArgs),
    /// List the front matter of a content category.
    List(ListArgs),
    /// Load one content record.
    Show(ShowArgs),
    /// Build a page view-model.
    Page(PageArgs),
    /// Simulate the book gallery opening transition.
    Gallery(GalleryArgs),
}

#[derive(Parser, Debug)]
struct PathArgs {
    /// Source rectangle as `left,top,width,height`.
    #[arg(long, value_parser = parse_rect)]
    from: Rectangle,

    /// Destination rectangle as `left,top,width,height`.
    #[arg(long, value_parser = parse_rect)]
    to: Rectangle,

    /// Number of interior steps, clamped to `0..=MAX_PATH_STEPS`.
    #[arg(long, allow_negative_numbers = true)]
    steps: i64,

    /// Peak arc offset.
    #[arg(long, default_value_t = folio::DEFAULT_ARC_AMPLITUDE)]
    amplitude: f64,

    /// Include the source and destination rectangles.
    #[arg(long, default_value_t = false)]
    full: bool,
}

#[derive(Parser, Debug)]
struct ScrollArgs {
    /// Comma-separated element offsets, one per frame.
    #[arg(long, value_delimiter = ',', allow_negative_numbers = true)]
    offsets: Vec<f64>,

    /// Scrollable height (container height minus viewport height).
    #[arg(long)]
    scrollable: f64,

    /// Fraction of the remaining distance covered per frame.
    #[arg(long, default_value_t = folio::DEFAULT_SCROLL_EASING)]
    easing: f64,
}

#[derive(Parser, Debug)]
struct ListArgs {
    /// Content root directory.
    #[arg(long)]
    content: PathBuf,

    #[arg(long)]
    category: String,
}

#[derive(Parser, Debug)]
struct ShowArgs {
    /// Content root directory.
    #[arg(long)]
    content: PathBuf,

    #[arg(long)]
    category: String,

    #[arg(long)]
    slug: String,

    /// Fail instead of printing the not-found placeholder.
    #[arg(long, default_value_t = false)]
    strict: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum PageKind {
    Home,
    Blog,
    Cheatsheets,
    Books,
    Playlists,
    Article,
}

#[derive(Parser, Debug)]
struct PageArgs {
    /// Site config TOML.
    #[arg(long)]
    config: PathBuf,

    #[arg(value_enum)]
    page: PageKind,

    /// Category of the article page.
    #[arg(long, default_value = folio::BLOG_CATEGORY)]
    category: String,

    /// Slug of the article page.
    #[arg(long)]
    slug: Option<String>,
}

#[derive(Parser, Debug)]
struct GalleryArgs {
    /// Site config TOML providing the book catalog.
    #[arg(long)]
    config: PathBuf,

    /// Index of the clicked book.
    #[arg(long)]
    book: usize,

    #[arg(long, default_value_t = 60)]
    fps: u32,

    /// Seed for mover jitter.
    #[arg(long, default_value_t = 1)]
    seed: u64,

    /// Viewport width used to lay out the grid and pick the panel side.
    #[arg(long, default_value_t = 1280.0)]
    viewport_width: f64,

    /// Frame budget.
    #[arg(long, default_value_t = 600)]
    max_frames: u64,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Path(args) => cmd_path(args),
        Command::Scroll(args) => cmd_scroll(args),
        Command::List(args) => cmd_list(args),
        Command::Show(args) => cmd_show(args),
        Command::Page(args) => cmd_page(args),
        Command::Gallery(args) => cmd_gallery(args),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .with_target(false)
        .init();
}

fn parse_rect(s: &str) -> Result<Rectangle, String> {
    let parts = s
        .split(',')
        .map(|p| p.trim().parse::<f64>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| format!("invalid number in '{s}': {e}"))?;
    match parts.as_slice() {
        [l, t, w, h] => Ok(Rectangle::new(*l, *t, *w, *h)),
        _ => Err(format!("expected left,top,width,height, got '{s}'")),
    }
}

fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    let out = serde_json::to_string_pretty(value).context("serialize output")?;
    println!("{out}");
    Ok(())
}

fn cmd_path(args: PathArgs) -> anyhow::Result<()> {
    let steps = clamp_step_count(args.steps);
    let motion = MotionPath::new(args.amplitude);
    let path = if args.full {
        motion.full(&args.from, &args.to, steps)
    } else {
        motion.generate(&args.from, &args.to, steps)
    };
    print_json(&path)
}

#[derive(serde::Serialize)]
struct ScrollRow {
    offset: f64,
    raw: f64,
    smoothed: f64,
}

fn cmd_scroll(args: ScrollArgs) -> anyhow::Result<()> {
    let mut tracker = ScrollTracker::new(args.easing)?;
    let rows: Vec<ScrollRow> = args
        .offsets
        .iter()
        .map(|&offset| ScrollRow {
            offset,
            raw: folio::raw_progress(offset, args.scrollable),
            smoothed: tracker.sample(offset, args.scrollable),
        })
        .collect();
    print_json(&rows)
}

fn cmd_list(args: ListArgs) -> anyhow::Result<()> {
    let store = ContentStore::new(&args.content);
    let items = store
        .list_content(&args.category)
        .with_context(|| format!("list '{}' in '{}'", args.category, args.content.display()))?;
    print_json(&items)
}

fn cmd_show(args: ShowArgs) -> anyhow::Result<()> {
    let store = ContentStore::new(&args.content);
    let entry = if args.strict {
        store
            .try_get_content_by_slug(&args.category, &args.slug)
            .with_context(|| format!("load '{}/{}'", args.category, args.slug))?
    } else {
        store.get_content_by_slug(&args.category, &args.slug)
    };
    print_json(&entry)
}

fn load_config(path: &Path) -> anyhow::Result<SiteConfig> {
    SiteConfig::from_path(path).with_context(|| format!("load site config '{}'", path.display()))
}

fn cmd_page(args: PageArgs) -> anyhow::Result<()> {
    let cfg = load_config(&args.config)?;
    let store = ContentStore::new(&cfg.content_dir);
    match args.page {
        PageKind::Home => print_json(&folio::home_page(&cfg, &store)?),
        PageKind::Blog => print_json(&folio::blog_index(&store)?),
        PageKind::Cheatsheets => print_json(&folio::cheatsheet_index(&store)?),
        PageKind::Books => print_json(&folio::books_page(&cfg)),
        PageKind::Playlists => print_json(&folio::playlists_page(&cfg)),
        PageKind::Article => {
            let slug = args
                .slug
                .as_deref()
                .context("the article page needs --slug")?;
            print_json(&folio::article_page(&store, &args.category, slug))
        }
    }
}

#[derive(serde::Serialize)]
struct GalleryFrame {
    frame: u64,
    secs: f64,
    state: GalleryState,
    movers: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    panel_content_opacity: Option<f64>,
}

#[derive(serde::Serialize)]
struct GalleryReport {
    book: String,
    panel_side: folio::PanelSide,
    frames: Vec<GalleryFrame>,
    final_state: GalleryState,
}

/// Records one summary row per frame while forwarding to the gallery.
struct Recorder<'a> {
    gallery: &'a mut BookGallery,
    frames: Vec<GalleryFrame>,
}

impl FrameDriven for Recorder<'_> {
    fn on_frame(&mut self, now_secs: f64) -> FrameRequest {
        let req = self.gallery.on_frame(now_secs);
        self.frames.push(GalleryFrame {
            frame: self.frames.len() as u64,
            secs: now_secs,
            state: self.gallery.state(),
            movers: self.gallery.movers().len(),
            panel_content_opacity: self
                .gallery
                .values()
                .get(folio::PANEL_CONTENT_TARGET, Property::Opacity),
        });
        req
    }

    fn on_unmount(&mut self) {
        self.gallery.on_unmount();
    }
}

/// Thumbnail rectangle of grid cell `index` in a four-column grid.
fn grid_cell(index: usize, viewport_width: f64) -> Rectangle {
    const COLUMNS: usize = 4;
    let cell_w = viewport_width / COLUMNS as f64;
    let (col, row) = (index % COLUMNS, index / COLUMNS);
    Rectangle::new(
        col as f64 * cell_w + cell_w * 0.1,
        row as f64 * cell_w * 1.5 + 40.0,
        cell_w * 0.8,
        cell_w * 1.2,
    )
}

fn cmd_gallery(args: GalleryArgs) -> anyhow::Result<()> {
    let cfg = load_config(&args.config)?;
    let fps = Fps::new(args.fps, 1)?;
    let book_count = cfg.books.len();
    let mut gallery = BookGallery::new(cfg.books, args.seed);
    for _ in 0..book_count {
        gallery.mark_cover_settled();
    }

    let item = grid_cell(args.book, args.viewport_width);
    let side = folio::panel_side_for(&item, args.viewport_width);
    let panel_left = match side {
        folio::PanelSide::Right => args.viewport_width * 0.55,
        folio::PanelSide::Left => args.viewport_width * 0.1,
    };
    let panel_image = Rectangle::new(panel_left, 80.0, args.viewport_width * 0.35, 480.0);

    let opened = gallery.open(args.book, item, panel_image, args.viewport_width)?;
    anyhow::ensure!(opened, "gallery did not accept the click");
    let title = gallery
        .current_book()
        .map(|b| b.title.clone())
        .unwrap_or_default();

    let mut recorder = Recorder {
        gallery: &mut gallery,
        frames: Vec::new(),
    };
    let report = FrameLoop::new(fps).run(&mut recorder, args.max_frames);
    tracing::info!(frames = report.frames, "gallery simulation finished");

    let frames = recorder.frames;
    print_json(&GalleryReport {
        book: title,
        panel_side: gallery.panel_side(),
        frames,
        final_state: gallery.state(),
    })
}
