// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Proteus-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Proteus and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Terminal UI: a pannable, zoomable canvas of entity cards with a strategy
//! sidebar.
//!
//! The event loop polls at 250ms so background generation results and toast
//! expiry are picked up without input. Mouse capture is enabled for the
//! whole session: left-drag on a card moves it, left-drag on empty canvas
//! pans, the wheel zooms about the cursor, and a click without movement
//! selects or completes a pending connection.

use std::{
    io,
    sync::{mpsc, Arc},
    thread,
    time::{Duration, Instant, SystemTime, UNIX_EPOCH},
};

use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Context, Line as CanvasLine, Rectangle},
        Block, Borders, Clear, List, ListItem, Paragraph, Wrap,
    },
    Frame, Terminal,
};

use crate::generate::{
    integrate_structure, snapshot, GenerateError, GeneratedStructure, StructureGenerator,
};
use crate::interact::{ClickOutcome, Interaction};
use crate::layout::{card_center, card_contains, CARD_HEIGHT, CARD_WIDTH};
use crate::model::{
    fixtures, Entity, EntityId, EntityKind, Graph, Point, RelationshipId, StrategyId, Workspace,
};
use crate::query::{entity_search, fuzzy_rank, SearchMode};
use crate::render::{build_scene, Scene};
use crate::viewport::Viewport;

mod theme;

use theme::{entity_kind_style, TuiTheme};

const FOOTER_BRAND: &str = "🅿 🆁 🅾 🆃 🅴 🆄 🆂 ";
const POLL_INTERVAL: Duration = Duration::from_millis(250);
const TOAST_TTL: Duration = Duration::from_secs(4);

/// Terminal cells are not square; the canvas maps one cell to this many
/// graph-plane pixels at scale 1.0.
const CELL_WIDTH_PX: f64 = 10.0;
const CELL_HEIGHT_PX: f64 = 20.0;

const WHEEL_ZOOM_IN: f64 = 1.1;
const WHEEL_ZOOM_OUT: f64 = 0.9;
const SIDEBAR_WIDTH: u16 = 34;

/// A workspace seeded with the built-in family-group structure.
pub fn demo_workspace() -> Workspace {
    Workspace::new(fixtures::family_group())
}

pub fn run(workspace: Workspace) -> Result<(), Box<dyn std::error::Error>> {
    run_with_generator(workspace, None)
}

pub fn run_with_generator(
    workspace: Workspace,
    generator: Option<Arc<dyn StructureGenerator + Send + Sync>>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut terminal = TerminalSession::new()?;
    let mut app = App::new(workspace);
    app.generator = generator;

    while !app.should_quit {
        app.poll_generation();
        app.expire_toast();
        terminal.draw(|frame| draw(frame, &mut app))?;

        if event::poll(POLL_INTERVAL)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
                Event::Mouse(mouse) => app.handle_mouse(mouse),
                _ => {}
            }
        }
    }

    Ok(())
}

#[derive(Debug, Clone, PartialEq)]
enum Overlay {
    None,
    Help,
    /// Free-text prompt for structure generation.
    Prompt { input: String },
    /// Fuzzy jump-to-entity palette.
    Palette { input: String, selected: usize },
}

#[derive(Debug, Clone)]
struct Toast {
    message: String,
    expires_at: Instant,
    is_error: bool,
}

/// Press bookkeeping to tell a click from a drag.
#[derive(Debug, Clone, Copy)]
struct PressState {
    column: u16,
    row: u16,
    dragged: bool,
}

type GenerationOutcome = Result<GeneratedStructure, GenerateError>;

struct App {
    workspace: Workspace,
    viewport: Viewport,
    interaction: Interaction,
    theme: TuiTheme,
    generator: Option<Arc<dyn StructureGenerator + Send + Sync>>,
    pending_generation: Option<mpsc::Receiver<GenerationOutcome>>,
    overlay: Overlay,
    sidebar_visible: bool,
    toast: Option<Toast>,
    press: Option<PressState>,
    /// Canvas rect from the last draw, for mouse hit testing.
    canvas_area: Rect,
    id_seq: u64,
    should_quit: bool,
}

impl App {
    fn new(workspace: Workspace) -> Self {
        let theme = match TuiTheme::from_env() {
            Ok(theme) => theme,
            Err(err) => {
                eprintln!("proteus: {err}; using default colors");
                TuiTheme::default()
            }
        };
        let mut app = Self {
            workspace,
            viewport: Viewport::default(),
            interaction: Interaction::default(),
            theme,
            generator: None,
            pending_generation: None,
            overlay: Overlay::None,
            sidebar_visible: true,
            toast: None,
            press: None,
            canvas_area: Rect::default(),
            id_seq: 0,
            should_quit: false,
        };
        app.viewport.reset(1280.0, 800.0);
        app
    }

    fn set_toast(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast {
            message: message.into(),
            expires_at: Instant::now() + TOAST_TTL,
            is_error: false,
        });
    }

    fn set_error_toast(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast {
            message: message.into(),
            expires_at: Instant::now() + TOAST_TTL,
            is_error: true,
        });
    }

    fn expire_toast(&mut self) {
        if let Some(toast) = &self.toast {
            if Instant::now() >= toast.expires_at {
                self.toast = None;
            }
        }
    }

    fn mint_suffix(&mut self) -> String {
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0);
        self.id_seq += 1;
        format!("{millis}-{}", self.id_seq)
    }

    fn mint_entity_id(&mut self) -> EntityId {
        let suffix = self.mint_suffix();
        EntityId::new(format!("n-{suffix}")).expect("minted ids are well-formed")
    }

    fn mint_relationship_id(&mut self) -> RelationshipId {
        let suffix = self.mint_suffix();
        RelationshipId::new(format!("e-{suffix}")).expect("minted ids are well-formed")
    }

    fn mint_strategy_id(&mut self) -> StrategyId {
        let suffix = self.mint_suffix();
        StrategyId::new(format!("s-{suffix}")).expect("minted ids are well-formed")
    }

    fn canvas_size_px(&self) -> (f64, f64) {
        (
            f64::from(self.canvas_area.width) * CELL_WIDTH_PX,
            f64::from(self.canvas_area.height) * CELL_HEIGHT_PX,
        )
    }

    /// Screen-pixel position of a mouse event, relative to the canvas.
    fn mouse_to_screen(&self, column: u16, row: u16) -> Point {
        let local_col = f64::from(column.saturating_sub(self.canvas_area.x));
        let local_row = f64::from(row.saturating_sub(self.canvas_area.y));
        Point::new(
            local_col * CELL_WIDTH_PX + CELL_WIDTH_PX / 2.0,
            local_row * CELL_HEIGHT_PX + CELL_HEIGHT_PX / 2.0,
        )
    }

    fn hit_test(&self, screen: Point) -> Option<EntityId> {
        let graph_point = self.viewport.screen_to_graph(screen);
        // Last card wins: later entries draw on top.
        self.workspace
            .active_graph()
            .entities()
            .values()
            .rev()
            .find(|entity| card_contains(entity.position(), graph_point))
            .map(|entity| entity.entity_id().clone())
    }

    fn center_on(&mut self, graph_point: Point) {
        let (width, height) = self.canvas_size_px();
        let offset = Point::new(
            width / 2.0 - graph_point.x * self.viewport.scale(),
            height / 2.0 - graph_point.y * self.viewport.scale(),
        );
        self.viewport = Viewport::new(offset, self.viewport.scale());
    }

    fn handle_key(&mut self, key: KeyEvent) {
        match &self.overlay {
            Overlay::None => self.handle_canvas_key(key),
            Overlay::Help => {
                self.overlay = Overlay::None;
            }
            Overlay::Prompt { .. } => self.handle_prompt_key(key),
            Overlay::Palette { .. } => self.handle_palette_key(key),
        }
    }

    fn handle_canvas_key(&mut self, key: KeyEvent) {
        let (width, height) = self.canvas_size_px();
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Esc => {
                if self.interaction.connecting_from_id().is_some() {
                    self.interaction.cancel_connect();
                    self.set_toast("Connect cancelled");
                } else {
                    self.workspace.set_selected_entity_id(None);
                }
            }
            KeyCode::Char('?') => self.overlay = Overlay::Help,
            KeyCode::Left | KeyCode::Char('h') => self.viewport.pan(CELL_WIDTH_PX * 4.0, 0.0),
            KeyCode::Right | KeyCode::Char('l') => self.viewport.pan(-CELL_WIDTH_PX * 4.0, 0.0),
            KeyCode::Up | KeyCode::Char('k') => self.viewport.pan(0.0, CELL_HEIGHT_PX * 2.0),
            KeyCode::Down | KeyCode::Char('j') => self.viewport.pan(0.0, -CELL_HEIGHT_PX * 2.0),
            KeyCode::Char('+') | KeyCode::Char('=') => {
                self.viewport.zoom_step(WHEEL_ZOOM_IN, width, height)
            }
            KeyCode::Char('-') => self.viewport.zoom_step(WHEEL_ZOOM_OUT, width, height),
            KeyCode::Char('0') => self.viewport.reset(width, height),
            KeyCode::Char('n') => self.add_entity_at_center(),
            KeyCode::Char('t') => self.cycle_selected_kind(),
            KeyCode::Char('c') => self.arm_connect(),
            KeyCode::Char('x') | KeyCode::Delete => self.delete_selected(),
            KeyCode::Char('s') => self.create_strategy(),
            KeyCode::Char('D') => self.delete_active_strategy(),
            KeyCode::Tab => self.cycle_scope(),
            KeyCode::Char('b') => self.toggle_comparing(),
            KeyCode::Char('g') => self.open_generate_prompt(),
            KeyCode::Char('/') => {
                self.overlay = Overlay::Palette {
                    input: String::new(),
                    selected: 0,
                };
            }
            KeyCode::Char('S') if key.modifiers.contains(KeyModifiers::SHIFT) => {
                self.sidebar_visible = !self.sidebar_visible;
            }
            _ => {}
        }
    }

    fn handle_prompt_key(&mut self, key: KeyEvent) {
        let Overlay::Prompt { input } = &mut self.overlay else {
            return;
        };
        match key.code {
            KeyCode::Esc => self.overlay = Overlay::None,
            KeyCode::Backspace => {
                input.pop();
            }
            KeyCode::Char(ch) => input.push(ch),
            KeyCode::Enter => {
                let prompt = input.trim().to_string();
                self.overlay = Overlay::None;
                if prompt.is_empty() {
                    return;
                }
                self.spawn_generation(prompt);
            }
            _ => {}
        }
    }

    fn handle_palette_key(&mut self, key: KeyEvent) {
        let Overlay::Palette { input, selected } = &mut self.overlay else {
            return;
        };
        match key.code {
            KeyCode::Esc => self.overlay = Overlay::None,
            KeyCode::Backspace => {
                input.pop();
                *selected = 0;
            }
            KeyCode::Down => *selected = selected.saturating_add(1),
            KeyCode::Up => *selected = selected.saturating_sub(1),
            KeyCode::Char(ch) => {
                input.push(ch);
                *selected = 0;
            }
            KeyCode::Enter => {
                let input = input.clone();
                let selected = *selected;
                self.overlay = Overlay::None;
                let matches = palette_matches(self.workspace.active_graph(), &input);
                if let Some(entity) = matches.get(selected.min(matches.len().saturating_sub(1))) {
                    let entity_id = entity.entity_id().clone();
                    let center = card_center(entity.position());
                    self.workspace.set_selected_entity_id(Some(entity_id));
                    self.center_on(center);
                }
            }
            _ => {}
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        let screen = self.mouse_to_screen(mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.press = Some(PressState {
                    column: mouse.column,
                    row: mouse.row,
                    dragged: false,
                });
                let hit = self.hit_test(screen);
                self.interaction
                    .pointer_down(screen, hit.as_ref(), &self.workspace, &self.viewport);
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                if let Some(press) = &mut self.press {
                    if press.column != mouse.column || press.row != mouse.row {
                        press.dragged = true;
                    }
                }
                self.interaction
                    .pointer_move(screen, &mut self.workspace, &mut self.viewport);
            }
            MouseEventKind::Up(MouseButton::Left) => {
                let was_click = self.press.take().is_some_and(|press| !press.dragged);
                self.interaction.pointer_up();
                if was_click {
                    let hit = self.hit_test(screen);
                    let relationship_id = self.mint_relationship_id();
                    let outcome =
                        self.interaction
                            .click(hit.as_ref(), &mut self.workspace, move || relationship_id);
                    match outcome {
                        ClickOutcome::Connected { .. } => self.set_toast("Relationship created"),
                        ClickOutcome::ConnectCancelled => self.set_toast("Connect cancelled"),
                        ClickOutcome::SelectionToggled | ClickOutcome::Cleared => {}
                    }
                }
            }
            MouseEventKind::ScrollUp => self.viewport.zoom_at(screen, WHEEL_ZOOM_IN),
            MouseEventKind::ScrollDown => self.viewport.zoom_at(screen, WHEEL_ZOOM_OUT),
            _ => {}
        }
    }

    fn add_entity_at_center(&mut self) {
        let (width, height) = self.canvas_size_px();
        let center = self.viewport.visible_center(width, height);
        let position = Point::new(center.x - CARD_WIDTH / 2.0, center.y - CARD_HEIGHT / 2.0);
        let entity_id = self.mint_entity_id();
        let count = self.workspace.active_graph().entities().len() + 1;
        self.workspace.active_graph_mut().add_entity(Entity::new(
            entity_id.clone(),
            EntityKind::Company,
            format!("New Entity {count}"),
            position,
        ));
        self.workspace.set_selected_entity_id(Some(entity_id));
    }

    fn cycle_selected_kind(&mut self) {
        let Some(selected) = self.workspace.selected_entity_id().cloned() else {
            self.set_toast("Select an entity first");
            return;
        };
        let graph = self.workspace.active_graph_mut();
        let Some(entity) = graph.entity(&selected) else {
            return;
        };
        let current = entity.kind();
        let index = EntityKind::ALL
            .iter()
            .position(|kind| *kind == current)
            .unwrap_or(0);
        let next = EntityKind::ALL[(index + 1) % EntityKind::ALL.len()];
        let mut updated = entity.clone();
        updated.set_kind(next);
        graph.update_entity(updated);
        self.set_toast(format!("Kind: {}", next.label()));
    }

    fn arm_connect(&mut self) {
        match self.workspace.selected_entity_id() {
            Some(entity_id) => {
                let entity_id = entity_id.clone();
                self.interaction.start_connect(entity_id);
                self.set_toast("Connecting: click a target entity");
            }
            None => self.set_toast("Select a source entity first"),
        }
    }

    fn delete_selected(&mut self) {
        let Some(selected) = self.workspace.selected_entity_id().cloned() else {
            self.set_toast("Select an entity first");
            return;
        };
        if let Some(removed) = self.workspace.active_graph_mut().remove_entity(&selected) {
            self.set_toast(format!(
                "Removed entity and {} relationship(s)",
                removed.len()
            ));
        }
        self.workspace.prune_selection();
        if self.interaction.connecting_from_id() == Some(&selected) {
            self.interaction.cancel_connect();
        }
    }

    fn create_strategy(&mut self) {
        let strategy_id = self.mint_strategy_id();
        let name = format!("Strategy {}", self.workspace.strategies().len() + 1);
        self.workspace.create_strategy(strategy_id, name.clone());
        self.set_toast(format!("Created {name}"));
    }

    fn delete_active_strategy(&mut self) {
        match self.workspace.active_strategy_id().cloned() {
            Some(strategy_id) => {
                self.workspace.delete_strategy(&strategy_id);
                self.workspace.prune_selection();
                self.set_toast("Strategy deleted");
            }
            None => self.set_toast("Baseline cannot be deleted"),
        }
    }

    /// Tab order: baseline, then strategies in creation order.
    fn cycle_scope(&mut self) {
        let ids: Vec<StrategyId> = self
            .workspace
            .strategies()
            .iter()
            .map(|s| s.strategy_id().clone())
            .collect();
        if ids.is_empty() {
            return;
        }
        let next = match self.workspace.active_strategy_id() {
            None => Some(ids[0].clone()),
            Some(current) => match ids.iter().position(|id| id == current) {
                Some(index) if index + 1 < ids.len() => Some(ids[index + 1].clone()),
                _ => None,
            },
        };
        self.workspace.select_scope(next);
        self.workspace.prune_selection();
    }

    fn toggle_comparing(&mut self) {
        if self.workspace.active_strategy_id().is_none() {
            self.set_toast("Select a strategy to compare against the baseline");
            return;
        }
        let comparing = !self.workspace.comparing();
        self.workspace.set_comparing(comparing);
        self.workspace.prune_selection();
        self.set_toast(if comparing {
            "Showing baseline (comparison)"
        } else {
            "Showing strategy"
        });
    }

    fn open_generate_prompt(&mut self) {
        if self.generator.is_none() {
            self.set_toast("No structure generator configured");
            return;
        }
        if self.pending_generation.is_some() {
            self.set_toast("Generation already running");
            return;
        }
        self.overlay = Overlay::Prompt {
            input: String::new(),
        };
    }

    fn spawn_generation(&mut self, prompt: String) {
        let Some(generator) = self.generator.clone() else {
            return;
        };
        let graph_snapshot = snapshot(self.workspace.active_graph());
        let (sender, receiver) = mpsc::channel();
        thread::spawn(move || {
            let outcome = generator.generate(&prompt, &graph_snapshot);
            let _ = sender.send(outcome);
        });
        self.pending_generation = Some(receiver);
        self.set_toast("Generating structure…");
    }

    fn poll_generation(&mut self) {
        let Some(receiver) = &self.pending_generation else {
            return;
        };
        match receiver.try_recv() {
            Ok(Ok(structure)) => {
                self.pending_generation = None;
                let result = integrate_structure(&structure, self.workspace.active_graph());
                match result {
                    Ok(graph) => {
                        *self.workspace.active_graph_mut() = graph;
                        self.workspace.prune_selection();
                        self.interaction.cancel_connect();
                        self.set_toast("Structure generated");
                    }
                    Err(err) => self.set_error_toast(err.to_string()),
                }
            }
            Ok(Err(err)) => {
                self.pending_generation = None;
                self.set_error_toast(err.to_string());
            }
            Err(mpsc::TryRecvError::Empty) => {}
            Err(mpsc::TryRecvError::Disconnected) => {
                self.pending_generation = None;
                self.set_error_toast("Generation worker died");
            }
        }
    }
}

fn draw(frame: &mut Frame<'_>, app: &mut App) {
    let base = app.theme.base_style();
    frame.render_widget(Block::default().style(base), frame.size());

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(frame.size());

    let columns = if app.sidebar_visible {
        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(20), Constraint::Length(SIDEBAR_WIDTH)])
            .split(rows[0])
    } else {
        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(20)])
            .split(rows[0])
    };

    draw_canvas(frame, app, columns[0]);
    if app.sidebar_visible {
        draw_sidebar(frame, app, columns[1]);
    }
    draw_footer(frame, app, rows[1]);

    match app.overlay.clone() {
        Overlay::None => {}
        Overlay::Help => draw_help(frame, app),
        Overlay::Prompt { input } => draw_prompt(frame, app, &input),
        Overlay::Palette { input, selected } => draw_palette(frame, app, &input, selected),
    }

    if let Some(toast) = app.toast.clone() {
        draw_toast(frame, app, &toast);
    }
}

fn draw_canvas(frame: &mut Frame<'_>, app: &mut App, area: Rect) {
    let scope_title = match app.workspace.active_strategy_id() {
        _ if app.workspace.comparing() => " Baseline (comparing) ".to_string(),
        Some(strategy_id) => match app.workspace.strategy(strategy_id) {
            Some(strategy) => format!(" {} ", strategy.name()),
            None => " Baseline ".to_string(),
        },
        None => " Baseline ".to_string(),
    };
    let border_style = if app.workspace.comparing() {
        app.theme.comparing_style()
    } else {
        app.theme.panel_border_style(true)
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(scope_title);
    let inner = block.inner(area);
    app.canvas_area = inner;

    let scene = build_scene(
        app.workspace.active_graph(),
        app.workspace.selected_entity_id(),
        app.interaction.connecting_from_id(),
    );

    let (width_px, height_px) = app.canvas_size_px();
    let viewport = app.viewport;
    let theme = app.theme.clone();

    let canvas = Canvas::default()
        .block(block)
        .background_color(ratatui::style::Color::Reset)
        .x_bounds([0.0, width_px.max(1.0)])
        .y_bounds([-height_px.max(1.0), 0.0])
        .paint(move |ctx| paint_scene(ctx, &scene, &viewport, &theme));
    frame.render_widget(canvas, area);
}

/// Paints in screen-pixel space with the y axis flipped (the canvas widget
/// grows upward, the graph plane grows downward).
fn paint_scene(ctx: &mut Context<'_>, scene: &Scene, viewport: &Viewport, theme: &TuiTheme) {
    for edge in &scene.edges {
        let from = viewport.graph_to_screen(edge.segment.from);
        let to = viewport.graph_to_screen(edge.segment.to);
        let color = theme.edge_color(edge.highlighted, edge.dimmed);
        ctx.draw(&CanvasLine {
            x1: from.x,
            y1: -from.y,
            x2: to.x,
            y2: -to.y,
            color,
        });
        if edge.arrow_at_to {
            ctx.print(to.x, -to.y, Span::styled("▸", theme.accent_style()));
        }
        if edge.arrow_at_from {
            ctx.print(from.x, -from.y, Span::styled("◂", theme.accent_style()));
        }
        if !edge.labels.is_empty() {
            let anchor = viewport.graph_to_screen(edge.segment.label_anchor);
            let style = if edge.dimmed {
                theme.dim_style()
            } else {
                theme.base_style()
            };
            ctx.print(anchor.x, -anchor.y, Span::styled(edge.labels.join(" / "), style));
        }
    }

    for card in &scene.cards {
        let top_left = viewport.graph_to_screen(card.position);
        let width = CARD_WIDTH * viewport.scale();
        let height = CARD_HEIGHT * viewport.scale();
        let color = if card.connecting {
            ratatui::style::Color::Green
        } else if card.dimmed {
            ratatui::style::Color::DarkGray
        } else {
            theme.kind_color(card.kind)
        };
        ctx.draw(&Rectangle {
            x: top_left.x,
            y: -(top_left.y + height),
            width,
            height,
            color,
        });

        let kind_style = entity_kind_style(card.kind);
        let title_style = if card.selected {
            theme.selection_style()
        } else if card.dimmed {
            theme.dim_style()
        } else {
            theme.base_style().add_modifier(Modifier::BOLD)
        };
        let center = viewport.graph_to_screen(card_center(card.position));
        ctx.print(
            center.x,
            -(center.y - CELL_HEIGHT_PX / 2.0),
            Span::styled(
                format!("{} {} [{}]", kind_style.glyph, card.name, kind_style.tag),
                title_style,
            ),
        );
        if !card.description.is_empty() {
            let style = if card.dimmed {
                theme.dim_style()
            } else {
                theme.base_style()
            };
            ctx.print(
                center.x,
                -(center.y + CELL_HEIGHT_PX / 2.0),
                Span::styled(card.description.clone(), style),
            );
        }
    }
}

fn draw_sidebar(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(app.theme.panel_border_style(false))
        .title(" Strategies ");

    let mut items: Vec<ListItem<'_>> = Vec::new();
    let baseline_active = app.workspace.active_strategy_id().is_none();
    let baseline_marker = if baseline_active { "▶" } else { " " };
    items.push(ListItem::new(Line::from(vec![Span::styled(
        format!("{baseline_marker} Baseline"),
        if baseline_active {
            app.theme.selection_style()
        } else {
            app.theme.base_style()
        },
    )])));

    for strategy in app.workspace.strategies() {
        let active = app.workspace.active_strategy_id() == Some(strategy.strategy_id());
        let marker = if active { "▶" } else { " " };
        let badge = if active && app.workspace.comparing() {
            " [comparing]"
        } else {
            ""
        };
        let style = if active {
            app.theme.selection_style()
        } else {
            app.theme.base_style()
        };
        items.push(ListItem::new(Line::from(vec![Span::styled(
            format!("{marker} {}{badge}", strategy.name()),
            style,
        )])));
    }

    items.push(ListItem::new(""));
    for kind in EntityKind::ALL {
        let style = entity_kind_style(kind);
        items.push(ListItem::new(Line::from(Span::styled(
            format!("  {} {} ({})", style.glyph, kind.label(), style.tag),
            app.theme.base_style().fg(app.theme.kind_color(kind)),
        ))));
    }

    frame.render_widget(List::new(items).block(block), area);
}

fn draw_footer(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let mut spans = vec![Span::styled(FOOTER_BRAND, app.theme.accent_style())];
    if app.pending_generation.is_some() {
        spans.push(Span::styled("generating… ", app.theme.comparing_style()));
    }
    if let Some(source) = app.interaction.connecting_from_id() {
        spans.push(Span::styled(
            format!("connect from {source} → click target  "),
            app.theme.connect_style(),
        ));
    }
    for (key, label) in [
        ("click", "select"),
        ("drag", "move/pan"),
        ("wheel", "zoom"),
        ("n", "new"),
        ("c", "connect"),
        ("x", "delete"),
        ("s", "strategy"),
        ("b", "compare"),
        ("g", "generate"),
        ("/", "find"),
        ("?", "help"),
        ("q", "quit"),
    ] {
        spans.push(Span::styled(key, app.theme.accent_style()));
        spans.push(Span::styled(format!(":{label}  "), app.theme.base_style()));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

fn draw_help(frame: &mut Frame<'_>, app: &App) {
    let area = centered_rect(frame.size(), 56, 20);
    frame.render_widget(Clear, area);
    let lines: Vec<Line<'_>> = [
        "Mouse",
        "  click card      select / deselect",
        "  click canvas    clear selection / cancel connect",
        "  drag card       move entity",
        "  drag canvas     pan",
        "  wheel           zoom about cursor",
        "Keys",
        "  arrows / hjkl   pan    +/- zoom    0 reset view",
        "  n  new entity        t  cycle entity kind",
        "  c  connect from selected (click target)",
        "  x  delete selected entity",
        "  s  new strategy      D  delete strategy",
        "  Tab cycle scope      b  compare with baseline",
        "  g  generate structure from a prompt",
        "  /  jump to entity (start with / for a regex)",
        "  S  toggle sidebar",
        "  Esc cancel           q  quit",
    ]
    .into_iter()
    .map(Line::from)
    .collect();
    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(app.theme.panel_border_style(true))
            .title(" Help (any key to close) "),
    );
    frame.render_widget(paragraph, area);
}

fn draw_prompt(frame: &mut Frame<'_>, app: &App, input: &str) {
    let area = centered_rect(frame.size(), 64, 5);
    frame.render_widget(Clear, area);
    let paragraph = Paragraph::new(vec![
        Line::from("Describe the structure to generate:"),
        Line::from(Span::styled(
            format!("> {input}█"),
            app.theme.accent_style(),
        )),
    ])
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(app.theme.panel_border_style(true))
            .title(" Generate (Enter to run, Esc to cancel) "),
    );
    frame.render_widget(paragraph, area);
}

/// Palette matching: a `/`-prefixed query is a case-insensitive regex over
/// names and descriptions; anything else ranks fuzzily by name. An invalid
/// regex matches nothing until the operator finishes typing it.
fn palette_matches<'a>(graph: &'a Graph, input: &str) -> Vec<&'a Entity> {
    match input.strip_prefix('/') {
        Some(pattern) => match entity_search(graph, pattern, SearchMode::Regex, true) {
            Ok(hits) => hits.into_iter().map(|hit| hit.entity).collect(),
            Err(_) => Vec::new(),
        },
        None => fuzzy_rank(graph, input)
            .into_iter()
            .map(|(entity, _)| entity)
            .collect(),
    }
}

fn draw_palette(frame: &mut Frame<'_>, app: &App, input: &str, selected: usize) {
    let area = centered_rect(frame.size(), 52, 12);
    frame.render_widget(Clear, area);

    let matches = palette_matches(app.workspace.active_graph(), input);
    let mut lines = vec![Line::from(Span::styled(
        format!("> {input}█"),
        app.theme.accent_style(),
    ))];
    for (index, entity) in matches.iter().take(8).enumerate() {
        let style = if index == selected.min(matches.len().saturating_sub(1)) {
            app.theme.selection_style()
        } else {
            app.theme.base_style()
        };
        let kind_style = entity_kind_style(entity.kind());
        lines.push(Line::from(Span::styled(
            format!("  {} {}", kind_style.glyph, entity.name()),
            style,
        )));
    }

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(app.theme.panel_border_style(true))
            .title(" Jump to entity (/ prefix for regex) "),
    );
    frame.render_widget(paragraph, area);
}

fn draw_toast(frame: &mut Frame<'_>, app: &App, toast: &Toast) {
    let area = frame.size();
    let width = (toast.message.chars().count() as u16 + 4).min(area.width);
    let rect = Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + 1,
        width,
        height: 3,
    };
    frame.render_widget(Clear, rect);
    let style = if toast.is_error {
        app.theme.error_style()
    } else {
        app.theme.base_style()
    };
    let paragraph = Paragraph::new(Line::from(Span::styled(toast.message.clone(), style))).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(app.theme.panel_border_style(false)),
    );
    frame.render_widget(paragraph, rect);
}

struct TerminalSession {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl TerminalSession {
    fn new() -> Result<Self, Box<dyn std::error::Error>> {
        enable_raw_mode()?;

        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture).map_err(|err| {
            teardown_terminal();
            err
        })?;

        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend).map_err(|err| {
            teardown_terminal();
            err
        })?;
        terminal.clear().map_err(|err| {
            teardown_terminal();
            err
        })?;

        Ok(Self { terminal })
    }

    fn draw(&mut self, draw_fn: impl FnOnce(&mut Frame<'_>)) -> io::Result<()> {
        self.terminal.draw(draw_fn)?;
        Ok(())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = self.terminal.show_cursor();
        teardown_terminal();
    }
}

fn teardown_terminal() {
    let _ = disable_raw_mode();
    let mut stdout = io::stdout();
    let _ = execute!(stdout, DisableMouseCapture, LeaveAlternateScreen);
}
