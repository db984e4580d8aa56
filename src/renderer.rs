use crate::entities::{Barrier, Enemy, GameState, Player, Projectile};
use crate::palette::{self, Rgb};
use crate::world::World;
use rand::Rng;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style, Stylize},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        Block, Borders, Clear, Paragraph,
        canvas::{Canvas, Context, Line as CanvasLine, Points},
    },
};

impl From<Rgb> for Color {
    fn from(Rgb(r, g, b): Rgb) -> Self {
        Color::Rgb(r, g, b)
    }
}

/// View struct that holds all game state needed for rendering
pub struct RenderView<'a> {
    pub game_state: GameState,
    pub player: &'a Player,
    pub enemies: &'a [Enemy],
    pub barriers: &'a [Barrier],
    pub projectiles: &'a [Projectile],
    pub level: u32,
    pub field_width: f64,
    pub field_height: f64,
    pub area: Rect,
}

impl<'a> RenderView<'a> {
    pub fn new(world: &'a World, area: Rect) -> Self {
        Self {
            game_state: world.state,
            player: &world.player,
            enemies: &world.enemies,
            barriers: &world.barriers,
            projectiles: &world.projectiles,
            level: world.level,
            field_width: world.config.field_width,
            field_height: world.config.field_height,
            area,
        }
    }
}

/// Largest rectangle inside `area` showing a `field_width` × `field_height` field
/// undistorted, centred horizontally. Terminal cells are about twice as tall as wide.
pub fn fit_field(area: Rect, field_width: f64, field_height: f64) -> Rect {
    let cols_per_row = 2.0 * field_width / field_height;
    let max_rows = area.height as f64;
    let max_cols = area.width as f64;

    let rows = max_rows.min(max_cols / cols_per_row).floor();
    let cols = (rows * cols_per_row).floor().min(max_cols);

    let width = cols as u16;
    let height = rows as u16;
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y,
        width,
        height,
    }
}

/// Handles all rendering responsibilities for the game
pub struct GameRenderer {
    star_count: usize,
}

impl GameRenderer {
    pub fn new(star_count: usize) -> Self {
        Self { star_count }
    }

    /// Main render method: the playfield, the HUD and, after a loss, the overlay
    pub fn render(&self, frame: &mut Frame, view: &RenderView) {
        let area = view.area;
        let hud_area = Rect {
            x: area.x,
            y: area.y,
            width: area.width,
            height: area.height.min(1),
        };
        let field_area = fit_field(
            Rect {
                x: area.x,
                y: area.y + hud_area.height,
                width: area.width,
                height: area.height.saturating_sub(hud_area.height),
            },
            view.field_width,
            view.field_height,
        );

        self.render_field(frame, view, field_area);
        self.render_hud(frame, view, hud_area);

        if view.game_state == GameState::GameOver {
            self.render_game_over(frame, view, field_area);
        }
    }

    fn render_field(&self, frame: &mut Frame, view: &RenderView, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(area);
        // Canvas units covered by one half-block pixel row
        let pixel_height = view.field_height / (inner.height.max(1) as f64 * 2.0);

        let canvas = Canvas::default()
            .block(block)
            .marker(Marker::HalfBlock)
            .x_bounds([0.0, view.field_width])
            .y_bounds([0.0, view.field_height])
            .paint(|ctx| {
                // Flickering starfield, regenerated every frame
                let mut rng = rand::rng();
                let stars: Vec<(f64, f64)> = (0..self.star_count)
                    .map(|_| {
                        (
                            rng.random_range(0.0..view.field_width),
                            rng.random_range(0.0..view.field_height),
                        )
                    })
                    .collect();
                ctx.draw(&Points {
                    coords: &stars,
                    color: palette::STAR.into(),
                });
                ctx.layer();

                let flip = |y: f64| view.field_height - y;

                for barrier in view.barriers.iter().filter(|b| !b.is_depleted()) {
                    fill_rect(
                        ctx,
                        barrier.x,
                        flip(barrier.y + barrier.height),
                        barrier.visible_width(),
                        barrier.height,
                        pixel_height,
                        palette::BARRIER.into(),
                    );
                }

                for enemy in view.enemies {
                    fill_rect(
                        ctx,
                        enemy.x,
                        flip(enemy.y + enemy.height),
                        enemy.width,
                        enemy.height,
                        pixel_height,
                        enemy.color().into(),
                    );
                }

                let player = view.player;
                fill_rect(
                    ctx,
                    player.x,
                    flip(player.y + player.height),
                    player.width,
                    player.height,
                    pixel_height,
                    palette::PLAYER.into(),
                );

                ctx.layer();
                for projectile in view.projectiles {
                    ctx.draw(&Points {
                        coords: &[(projectile.x, flip(projectile.y))],
                        color: projectile.color.into(),
                    });
                }
            });

        frame.render_widget(canvas, area);
    }

    fn render_hud(&self, frame: &mut Frame, view: &RenderView, area: Rect) {
        let style = Style::default()
            .fg(palette::HUD.into())
            .add_modifier(Modifier::BOLD);
        let hud = Line::from(vec![
            Span::styled(format!("Score {}", view.player.score), style),
            Span::styled(format!("   Level {}", view.level), style),
            Span::styled(format!("   Lives {}", view.player.lives), style),
            Span::styled(
                "   [←/→: Move] [Space/↑: Fire] [Q: Quit]",
                Style::default().fg(Color::DarkGray),
            ),
        ]);

        frame.render_widget(Paragraph::new(hud).centered(), area);
    }

    fn render_game_over(&self, frame: &mut Frame, view: &RenderView, area: Rect) {
        let game_over_text = vec![
            Line::from(""),
            Line::from("GAME OVER").centered().bold().green(),
            Line::from(""),
            Line::from(format!("Final Score: {}", view.player.score))
                .centered()
                .yellow()
                .bold(),
            Line::from(format!("Level {}", view.level)).centered().white(),
            Line::from(""),
            Line::from("Press Space to Restart").centered().white(),
            Line::from("Press Q to quit").centered().white(),
        ];

        let width = 30.min(area.width);
        let height = 10.min(area.height);
        let overlay = Rect {
            x: area.x + (area.width - width) / 2,
            y: area.y + (area.height - height) / 2,
            width,
            height,
        };

        frame.render_widget(Clear, overlay);
        frame.render_widget(
            Paragraph::new(game_over_text)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(Color::Green)),
                )
                .alignment(Alignment::Center),
            overlay,
        );
    }
}

/// Fills a rectangle (canvas coordinates, origin bottom-left) with horizontal
/// lines one pixel row apart
fn fill_rect(
    ctx: &mut Context,
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    pixel_height: f64,
    color: Color,
) {
    let step = pixel_height.max(f64::EPSILON);
    let mut line_y = y;
    while line_y <= y + height {
        ctx.draw(&CanvasLine::new(x, line_y, x + width, line_y, color));
        line_y += step;
    }
}
