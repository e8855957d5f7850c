use crossterm::style::Color;

/// Foreground colors for the board glyphs.
///
/// `None` renders unstyled, so the plain theme's output is byte-identical to
/// the classic text board and stays easy to assert on in tests.
#[derive(Debug, Clone)]
pub struct Theme {
    /// The knight's square.
    pub current: Option<Color>,
    /// Squares already visited during play.
    pub trail: Option<Color>,
    /// Onward-move counts on reachable squares.
    pub hint: Option<Color>,
    /// Visit numbers of a computed tour.
    pub visit: Option<Color>,
    /// Frame and row/column labels.
    pub frame: Option<Color>,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            current: Some(Color::Rgb {
                r: 255,
                g: 200,
                b: 80,
            }),
            trail: Some(Color::Rgb {
                r: 120,
                g: 130,
                b: 150,
            }),
            hint: Some(Color::Rgb {
                r: 80,
                g: 180,
                b: 255,
            }),
            visit: Some(Color::Rgb {
                r: 140,
                g: 220,
                b: 120,
            }),
            frame: Some(Color::Rgb {
                r: 70,
                g: 75,
                b: 90,
            }),
        }
    }

    /// No colors at all, for `--no-color` and dumb terminals.
    pub fn plain() -> Self {
        Self {
            current: None,
            trail: None,
            hint: None,
            visit: None,
            frame: None,
        }
    }
}
