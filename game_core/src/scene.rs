//! Renderer-agnostic draw list
//!
//! `Scene::capture` turns session state into primitive shapes. A host paints
//! them in order onto whatever surface it owns.

use std::f32::consts::{PI, TAU};

use glam::Vec2;

use crate::params::Params;
use crate::systems::within_reach;
use crate::Session;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Paint {
    Ink,
    Green,
    Red,
    Blue,
}

impl Paint {
    pub fn css(self) -> &'static str {
        match self {
            Paint::Ink => "black",
            Paint::Green => "green",
            Paint::Red => "red",
            Paint::Blue => "blue",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// Filled axis-aligned rectangle
    Rect { origin: Vec2, size: Vec2, paint: Paint },
    /// Filled arc from `start` to `end` (radians, clockwise on screen), closed by its chord
    Arc {
        center: Vec2,
        radius: f32,
        start: f32,
        end: f32,
        paint: Paint,
    },
    /// Stroked segment
    Line {
        from: Vec2,
        to: Vec2,
        width: f32,
        paint: Paint,
    },
    /// Stroked text, `at` is the baseline start
    Text {
        at: Vec2,
        text: String,
        size_px: f32,
        paint: Paint,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub width: f32,
    pub height: f32,
    pub shapes: Vec<Shape>,
}

impl Scene {
    pub fn capture(session: &Session) -> Self {
        let arena = session.arena();
        let config = session.config();
        let mut shapes = Vec::new();

        let cannon = session.cannon();
        let firing_point = cannon.map(|(body, rig)| rig.firing_point(&body));

        if let Some((body, rig)) = cannon {
            let pivot = rig.firing_point(&body);
            shapes.push(Shape::Rect {
                origin: body.pos,
                size: rig.size,
                paint: Paint::Ink,
            });
            shapes.push(Shape::Arc {
                center: pivot,
                radius: config.turret_radius,
                start: PI,
                end: TAU,
                paint: Paint::Ink,
            });
            shapes.push(Shape::Line {
                from: pivot,
                to: rig.pipe_end(&body),
                width: Params::PIPE_LINE_WIDTH,
                paint: Paint::Ink,
            });
        }

        if let (Some((body, shot)), Some(pivot)) = (session.projectile(), firing_point) {
            let paint = if within_reach(pivot, body.pos, config.proximity) {
                Paint::Green
            } else {
                Paint::Red
            };
            shapes.push(Shape::Arc {
                center: body.pos,
                radius: shot.radius,
                start: 0.0,
                end: TAU,
                paint,
            });
        }

        if !session.is_game_over() {
            for view in session.targets().into_iter().filter(|view| view.active) {
                let near_cannon = firing_point
                    .map(|pivot| within_reach(pivot, view.body.pos, config.proximity))
                    .unwrap_or(false);
                let paint = if view.hit {
                    Paint::Blue
                } else if near_cannon {
                    Paint::Red
                } else {
                    Paint::Green
                };
                shapes.push(Shape::Arc {
                    center: view.body.pos,
                    radius: view.target.radius,
                    start: 0.0,
                    end: TAU,
                    paint,
                });
            }
        }

        shapes.push(Shape::Text {
            at: Vec2::new(10.0, 50.0),
            text: format!("Points: {}", session.points()),
            size_px: 30.0,
            paint: Paint::Ink,
        });
        if session.is_game_over() {
            shapes.push(Shape::Text {
                at: Vec2::new(300.0, 350.0),
                text: "GAME OVER".to_string(),
                size_px: 60.0,
                paint: Paint::Ink,
            });
        } else if session.is_paused() {
            shapes.push(Shape::Text {
                at: Vec2::new(380.0, 350.0),
                text: "PAUSED".to_string(),
                size_px: 60.0,
                paint: Paint::Ink,
            });
        }

        Self {
            width: arena.width,
            height: arena.height,
            shapes,
        }
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.shapes.iter().filter_map(|shape| match shape {
            Shape::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    /// Paint of the filled circle centred at `center`, if one was drawn
    pub fn circle_paint(&self, center: Vec2) -> Option<Paint> {
        self.shapes.iter().find_map(|shape| match shape {
            Shape::Arc {
                center: c,
                start,
                paint,
                ..
            } if *c == center && *start == 0.0 => Some(*paint),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Body, Config, GameRng};
    use rand::rngs::mock::StepRng;

    fn session() -> Session {
        Session::new(Config::new(), GameRng::from_source(StepRng::new(0, 0)))
    }

    fn circles(scene: &Scene) -> usize {
        scene
            .shapes
            .iter()
            .filter(|shape| matches!(shape, Shape::Arc { start, .. } if *start == 0.0))
            .count()
    }

    #[test]
    fn test_initial_scene() {
        let s = session();
        let scene = Scene::capture(&s);

        assert_eq!(scene.width, 1000.0);
        assert_eq!(scene.height, 700.0);
        // Hull, dome, pipe, projectile, primary target, score
        assert_eq!(scene.shapes.len(), 6);
        assert_eq!(circles(&scene), 2, "Secondary target is hidden");
        assert_eq!(scene.texts().collect::<Vec<_>>(), vec!["Points: 0"]);
        assert_eq!(
            scene.circle_paint(Vec2::new(75.0, 650.0)),
            Some(Paint::Green),
            "Docked projectile reads as ready"
        );
        assert_eq!(
            scene.circle_paint(Vec2::new(51.0, 51.0)),
            Some(Paint::Green)
        );
    }

    #[test]
    fn test_pipe_line_follows_angle() {
        let s = session();
        let scene = Scene::capture(&s);
        let line = scene
            .shapes
            .iter()
            .find_map(|shape| match shape {
                Shape::Line { from, to, width, .. } => Some((*from, *to, *width)),
                _ => None,
            })
            .unwrap();
        assert_eq!(line.0, Vec2::new(75.0, 650.0));
        assert!((line.1 - Vec2::new(75.0, 550.0)).length() < 1e-3);
        assert_eq!(line.2, 15.0);
    }

    #[test]
    fn test_target_near_cannon_is_red() {
        let mut s = session();
        let [primary, _] = s.target_entities();
        s.place(primary, Body::new(Vec2::new(110.0, 610.0), Vec2::ZERO));
        let scene = Scene::capture(&s);
        assert_eq!(
            scene.circle_paint(Vec2::new(110.0, 610.0)),
            Some(Paint::Red)
        );
    }

    #[test]
    fn test_flying_projectile_far_from_cannon_is_red() {
        let mut s = session();
        s.launch();
        s.place(
            s.projectile_entity(),
            Body::new(Vec2::new(400.0, 300.0), Vec2::ZERO),
        );
        let scene = Scene::capture(&s);
        assert_eq!(
            scene.circle_paint(Vec2::new(400.0, 300.0)),
            Some(Paint::Red)
        );
    }

    #[test]
    fn test_game_over_hides_targets() {
        let mut s = session();
        let [primary, _] = s.target_entities();
        s.place(primary, Body::new(Vec2::new(120.0, 560.0), Vec2::ZERO));
        s.update(16.0);
        assert!(s.is_game_over());

        let scene = Scene::capture(&s);
        assert_eq!(circles(&scene), 1, "Only the projectile remains");
        assert!(scene.texts().any(|text| text == "GAME OVER"));
    }

    #[test]
    fn test_paused_banner() {
        let mut s = session();
        s.toggle_pause();
        let scene = Scene::capture(&s);
        assert!(scene.texts().any(|text| text == "PAUSED"));
    }
}
