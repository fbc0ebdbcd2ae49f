use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use page_composer_config::Config;
use page_composer_engine::editing::mutator;
use page_composer_engine::editing::outline::{self, OutlineLine};
use page_composer_engine::io::{Asset, FsAssetStore, upload_batch};
use page_composer_engine::{
    Cmd, Editor, ElementPath, ElementType, InsertPosition, LayoutType, LoadedContent, Page,
    Selection, io,
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use relative_path::{RelativePath, RelativePathBuf};
use std::{
    env,
    io::{Stdout, stdout},
    path::PathBuf,
    process,
    sync::Arc,
};

/// Name used for the first page when the directory holds none yet
const NEW_PAGE: &str = "index.json";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pane {
    Pages,
    Outline,
}

/// What the outline pane is showing for the selected page file
enum Content {
    Editing(Editor),
    /// The file could not be read as a page; shown as text, not editable
    Raw(Vec<String>),
    Error(String),
}

struct App {
    pages_path: PathBuf,
    default_layout: LayoutType,
    pages: Vec<RelativePathBuf>,
    page_list_state: ListState,
    outline_state: ListState,
    outline: Vec<OutlineLine>,
    content: Content,
    focus: Pane,
    dirty: bool,
    status: String,
    /// File paths being typed for an image attach, while the prompt is open
    input: Option<String>,
    assets: Arc<FsAssetStore>,
    runtime: tokio::runtime::Runtime,
}

/// Element kinds an uploaded image can be attached to
fn accepts_uploads(kind: ElementType) -> bool {
    kind.holds_images() || kind == ElementType::Image
}

impl App {
    fn new(config: &Config) -> Result<Self> {
        let pages_path = config.pages_path.clone();
        let mut pages: Vec<RelativePathBuf> = io::scan_page_files(&pages_path)?
            .iter()
            .filter_map(|path| path.strip_prefix(&pages_path).ok())
            .filter_map(|path| RelativePathBuf::from_path(path).ok())
            .collect();
        if pages.is_empty() {
            pages.push(RelativePath::new(NEW_PAGE).to_relative_path_buf());
        }

        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()?;

        let mut app = Self {
            pages_path,
            default_layout: config.default_layout,
            pages,
            page_list_state: ListState::default(),
            outline_state: ListState::default(),
            outline: Vec::new(),
            content: Content::Editing(Editor::default()),
            focus: Pane::Pages,
            dirty: false,
            status: String::new(),
            input: None,
            assets: Arc::new(FsAssetStore::new(config.assets_dir())),
            runtime,
        };

        app.page_list_state.select(Some(0));
        app.load_selected_page();
        Ok(app)
    }

    fn selected_page(&self) -> Option<&RelativePathBuf> {
        self.page_list_state
            .selected()
            .and_then(|index| self.pages.get(index))
    }

    fn next(&mut self) {
        match self.focus {
            Pane::Pages => {
                let i = match self.page_list_state.selected() {
                    Some(i) => (i + 1) % self.pages.len(),
                    None => 0,
                };
                self.page_list_state.select(Some(i));
                self.load_selected_page();
            }
            Pane::Outline => {
                if self.outline.is_empty() {
                    return;
                }
                let i = match self.outline_state.selected() {
                    Some(i) => (i + 1) % self.outline.len(),
                    None => 0,
                };
                self.select_outline_row(i);
            }
        }
    }

    fn previous(&mut self) {
        match self.focus {
            Pane::Pages => {
                let i = match self.page_list_state.selected() {
                    Some(0) | None => self.pages.len() - 1,
                    Some(i) => i - 1,
                };
                self.page_list_state.select(Some(i));
                self.load_selected_page();
            }
            Pane::Outline => {
                if self.outline.is_empty() {
                    return;
                }
                let i = match self.outline_state.selected() {
                    Some(0) | None => self.outline.len() - 1,
                    Some(i) => i - 1,
                };
                self.select_outline_row(i);
            }
        }
    }

    fn switch_pane(&mut self) {
        self.focus = match self.focus {
            Pane::Pages => Pane::Outline,
            Pane::Outline => Pane::Pages,
        };
    }

    fn load_selected_page(&mut self) {
        let Some(relative_path) = self.selected_page().cloned() else {
            return;
        };
        let absolute_path = relative_path.to_path(&self.pages_path);

        self.content = if !absolute_path.exists() {
            Content::Editing(Editor::new(Page::new()))
        } else {
            match std::fs::read_to_string(&absolute_path) {
                Ok(raw) => match io::load_content(&raw) {
                    LoadedContent::Structured(page) => Content::Editing(Editor::new(page)),
                    LoadedContent::Empty => Content::Editing(Editor::new(Page::new())),
                    LoadedContent::Raw(text) => {
                        Content::Raw(text.lines().map(str::to_string).collect())
                    }
                },
                Err(e) => Content::Error(format!("Error reading file: {e}")),
            }
        };
        self.dirty = false;
        self.status.clear();
        self.refresh_outline(0);
    }

    fn refresh_outline(&mut self, row: usize) {
        self.outline = match &self.content {
            Content::Editing(editor) => outline::lines(editor.page()),
            _ => Vec::new(),
        };
        if self.outline.is_empty() {
            self.outline_state.select(None);
        } else {
            self.select_outline_row(row.min(self.outline.len() - 1));
        }
    }

    fn select_outline_row(&mut self, row: usize) {
        self.outline_state.select(Some(row));
        let target = self
            .outline
            .get(row)
            .map(|line| line.target)
            .unwrap_or_default();
        if let Content::Editing(editor) = &mut self.content {
            match target {
                Selection::Column(path) => editor.select_column(path),
                Selection::Element(path) => editor.select_element(path),
                Selection::None => editor.clear_selection(),
            }
        }
    }

    /// Section index of the row under the cursor
    fn section_under_cursor(&self) -> Option<usize> {
        let row = self.outline_state.selected()?;
        let sections_above = self.outline[..=row]
            .iter()
            .filter(|line| line.depth == 0)
            .count();
        sections_above.checked_sub(1)
    }

    /// Apply a command to the open page; true when it changed the page
    fn edit(&mut self, cmd: Cmd) -> bool {
        let row = self.outline_state.selected().unwrap_or(0);
        let Content::Editing(editor) = &mut self.content else {
            self.status = "Page is not editable".to_string();
            return false;
        };
        let patch = editor.apply(cmd);
        if patch.applied {
            self.dirty = true;
            self.status = format!("Version {}", patch.version);
        } else {
            self.status = "Nothing changed".to_string();
        }
        self.refresh_outline(row);
        patch.applied
    }

    fn selection(&self) -> Selection {
        match &self.content {
            Content::Editing(editor) => editor.selection(),
            _ => Selection::None,
        }
    }

    /// The selected element and its kind, if an element is selected
    fn selected_element(&self) -> Option<(ElementPath, ElementType)> {
        let Content::Editing(editor) = &self.content else {
            return None;
        };
        let path = editor.selection().selected_element()?;
        let element = mutator::element(editor.page(), path)?;
        Some((path, element.element_type()))
    }

    fn add_section(&mut self) {
        let layout = self.default_layout;
        if self.edit(Cmd::AddSection { layout }) {
            self.status = format!("Added {} section", layout.label());
        }
    }

    fn add_text(&mut self, position: InsertPosition) {
        let Some(column) = self.selection().column() else {
            self.status = "Select a column first".to_string();
            return;
        };
        let kind = ElementType::Text;
        if self.edit(Cmd::AddElement {
            column,
            kind,
            position,
        }) {
            self.status = format!("Added {}", kind.label());
        }
    }

    fn add_nested_column(&mut self) {
        match self.selection().column() {
            Some(column) => {
                self.edit(Cmd::AddNestedColumn {
                    parent: column.parent(),
                });
            }
            None => self.status = "Select a column first".to_string(),
        }
    }

    fn add_panel(&mut self) {
        match self.selected_element() {
            Some((element, kind)) if kind.holds_panels() => {
                if self.edit(Cmd::AddItem { element }) {
                    self.status = format!("Added a panel to {}", kind.label());
                }
            }
            _ => self.status = "Select an accordion or tabs element first".to_string(),
        }
    }

    fn remove_selected(&mut self) {
        match self.selection() {
            Selection::Element(element) => {
                self.edit(Cmd::RemoveElement { element });
            }
            Selection::Column(column) => {
                self.edit(Cmd::RemoveColumn { column });
            }
            Selection::None => match self.section_under_cursor() {
                Some(section) => {
                    self.edit(Cmd::RemoveSection { section });
                }
                None => self.status = "Nothing selected".to_string(),
            },
        }
    }

    fn begin_attach(&mut self) {
        match self.selected_element() {
            Some((_, kind)) if accepts_uploads(kind) => self.input = Some(String::new()),
            _ => self.status = "Select a gallery, carousel or image element first".to_string(),
        }
    }

    /// Upload the files named in `paths` and attach them to the selected element.
    ///
    /// Files that cannot be read or uploaded are left out and reported.
    fn attach_images(&mut self, paths: &str) {
        let Some((element, kind)) = self.selected_element() else {
            self.status = "Selection changed, nothing attached".to_string();
            return;
        };

        let mut problems = Vec::new();
        let mut assets = Vec::new();
        for path in paths.split_whitespace().map(PathBuf::from) {
            match std::fs::read(&path) {
                Ok(bytes) => {
                    let name = path
                        .file_name()
                        .map(|name| name.to_string_lossy().into_owned())
                        .unwrap_or_else(|| path.display().to_string());
                    assets.push(Asset::new(name, bytes));
                }
                Err(e) => problems.push(format!("{}: {e}", path.display())),
            }
        }

        let batch = self
            .runtime
            .block_on(upload_batch(Arc::clone(&self.assets), assets));
        if batch.has_failures() {
            problems.extend(batch.failures.iter().map(ToString::to_string));
        }

        let (cmd, count) = if kind.holds_images() {
            (batch.append_command(element), batch.urls.len())
        } else {
            (batch.image_command(element), batch.urls.len().min(1))
        };
        let attached = cmd.is_some_and(|cmd| self.edit(cmd));

        self.status = match (attached, problems.first()) {
            (true, None) => format!("Attached {count} image(s) to {}", kind.label()),
            (true, Some(first)) => {
                format!("Attached {count}, {} failed: {first}", problems.len())
            }
            (false, Some(first)) => format!("{} failed: {first}", problems.len()),
            (false, None) => "No files given".to_string(),
        };
    }

    fn save(&mut self) -> Result<()> {
        let Content::Editing(editor) = &self.content else {
            self.status = "Page is not editable".to_string();
            return Ok(());
        };
        let Some(relative_path) = self.selected_page().cloned() else {
            return Ok(());
        };
        io::write_page(&relative_path, &self.pages_path, editor.page())?;
        self.dirty = false;
        self.status = format!("Saved {relative_path}");
        Ok(())
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env().init();

    // Determine pages path from CLI args or config file
    let args: Vec<String> = env::args().collect();
    let config_path = Config::config_path();

    let config;
    let from_config;

    if args.len() == 2 {
        // CLI argument provided - use it
        config = Config::new(PathBuf::from(&args[1]));
        from_config = false;
    } else if args.len() == 1 {
        // No CLI argument - try config file
        match Config::load() {
            Ok(Some(loaded)) => {
                config = loaded;
                from_config = true;
            }
            Ok(None) => {
                eprintln!("Error: No pages path provided and no config file found");
                eprintln!("Usage: {} <pages-folder-path>", args[0]);
                eprintln!("Or create a config file at {}", config_path.display());
                process::exit(1);
            }
            Err(e) => {
                eprintln!("Error: Failed to load config file: {e}");
                eprintln!("Usage: {} <pages-folder-path>", args[0]);
                process::exit(1);
            }
        }
    } else {
        eprintln!("Usage: {} [pages-folder-path]", args[0]);
        process::exit(1);
    };

    let pages_path = &config.pages_path;
    if let Err(e) = io::validate_pages_dir(pages_path) {
        let source = if from_config {
            format!(" from config file '{}'", config_path.display())
        } else {
            String::new()
        };
        eprintln!(
            "Error: Pages path '{}'{} is invalid: {e}",
            pages_path.display(),
            source
        );
        process::exit(1);
    }
    log::info!("editing pages in {}", pages_path.display());

    // First run with an explicit folder: remember it for next time
    if !from_config && !config_path.exists() {
        match config.save() {
            Ok(()) => log::info!("saved pages path to {}", config_path.display()),
            Err(e) => log::warn!("could not save config to {}: {e}", config_path.display()),
        }
    }

    let mut app = App::new(&config)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if let Some(input) = app.input.as_mut() {
                match key.code {
                    KeyCode::Enter => {
                        let paths = std::mem::take(input);
                        app.input = None;
                        app.attach_images(&paths);
                    }
                    KeyCode::Esc => {
                        app.input = None;
                        app.status = "Attach cancelled".to_string();
                    }
                    KeyCode::Backspace => {
                        input.pop();
                    }
                    KeyCode::Char(c) => input.push(c),
                    _ => {}
                }
                continue;
            }
            match key.code {
                KeyCode::Char('q') => return Ok(()),
                KeyCode::Down | KeyCode::Char('j') => app.next(),
                KeyCode::Up | KeyCode::Char('k') => app.previous(),
                KeyCode::Tab => app.switch_pane(),
                KeyCode::Char('s') => app.add_section(),
                KeyCode::Char('t') => app.add_text(InsertPosition::After),
                KeyCode::Char('b') => app.add_text(InsertPosition::Before),
                KeyCode::Char('n') => app.add_nested_column(),
                KeyCode::Char('x') => app.remove_selected(),
                KeyCode::Char('p') => app.add_panel(),
                KeyCode::Char('a') => app.begin_attach(),
                KeyCode::Char('w') => {
                    if let Err(e) = app.save() {
                        app.status = format!("Save failed: {e}");
                    }
                }
                _ => {}
            }
        }
    }
}

fn pane_block(title: String, focused: bool) -> Block<'static> {
    let border_style = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(title)
}

fn ui(f: &mut Frame, app: &mut App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(2)].as_ref())
        .split(f.area());

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .margin(1)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)].as_ref())
        .split(rows[0]);

    // Page list panel
    let page_items: Vec<ListItem> = app
        .pages
        .iter()
        .map(|page| ListItem::new(Line::from(page.as_str().to_string())))
        .collect();

    let pages_list = List::new(page_items)
        .block(pane_block("Pages".to_string(), app.focus == Pane::Pages))
        .highlight_style(Style::default().bg(Color::Yellow).fg(Color::Black));

    f.render_stateful_widget(pages_list, chunks[0], &mut app.page_list_state);

    // Outline panel
    let title = match app.selected_page() {
        Some(page) if app.dirty => format!("{page} [modified]"),
        Some(page) => page.to_string(),
        None => "Outline".to_string(),
    };
    let block = pane_block(title, app.focus == Pane::Outline);

    match &app.content {
        Content::Editing(_) if app.outline.is_empty() => {
            let empty = Paragraph::new("Empty page. Press s to add a section.").block(block);
            f.render_widget(empty, chunks[1]);
        }
        Content::Editing(_) => {
            let outline_items: Vec<ListItem> = app
                .outline
                .iter()
                .map(|line| {
                    let indent = "  ".repeat(line.depth);
                    let style = if line.depth == 0 {
                        Style::default().add_modifier(Modifier::BOLD)
                    } else {
                        Style::default()
                    };
                    ListItem::new(Line::from(Span::styled(
                        format!("{indent}{}", line.text),
                        style,
                    )))
                })
                .collect();

            let outline_list = List::new(outline_items)
                .block(block)
                .highlight_style(Style::default().bg(Color::Cyan).fg(Color::Black));

            f.render_stateful_widget(outline_list, chunks[1], &mut app.outline_state);
        }
        Content::Raw(lines) => {
            let text: Vec<Line> = lines.iter().map(|line| Line::from(line.clone())).collect();
            let raw = Paragraph::new(text)
                .block(block.title_bottom("not a page tree, read only"))
                .wrap(ratatui::widgets::Wrap { trim: false });
            f.render_widget(raw, chunks[1]);
        }
        Content::Error(message) => {
            let error = Paragraph::new(message.as_str()).block(block);
            f.render_widget(error, chunks[1]);
        }
    }

    // Instructions
    let help_text = Line::from(vec![
        Span::raw("q: Quit | j/k: Move | Tab: Pane | s: Section | "),
        Span::raw("t/b: Text after/before | n: Nested | p: Panel | a: Attach images | "),
        Span::raw("x: Remove | w: Save"),
    ]);
    let status = match &app.input {
        Some(input) => Line::from(Span::styled(
            format!("Image files (Enter to attach, Esc to cancel): {input}_"),
            Style::default().fg(Color::Yellow),
        )),
        None => Line::from(Span::styled(
            app.status.clone(),
            Style::default().fg(Color::Green),
        )),
    };

    let help = Paragraph::new(vec![help_text, status]).block(Block::default());
    f.render_widget(help, rows[1]);
}
