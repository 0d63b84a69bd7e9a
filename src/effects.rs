//! Pure state and math behind the scroll and pointer effects. The view layer
//! feeds browser events in and reads derived values out.

/// Vertical scroll (px) past which the header gets its solid background.
pub const HEADER_SCROLL_THRESHOLD: f64 = 10.0;
/// Vertical scroll (px) past which the scroll-to-top button appears.
pub const SCROLL_TOP_THRESHOLD: f64 = 300.0;
/// Maximum card rotation in degrees on either axis.
pub const MAX_TILT_DEG: f64 = 10.0;

pub fn header_is_solid(scroll_y: f64) -> bool {
    scroll_y > HEADER_SCROLL_THRESHOLD
}

pub fn scroll_top_visible(scroll_y: f64) -> bool {
    scroll_y > SCROLL_TOP_THRESHOLD
}

pub fn parallax_offset(scroll_y: f64, speed: f64) -> f64 {
    scroll_y.max(0.0) * speed
}

/// Tracks which section most recently entered the viewport.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ScrollSpy {
    active: Option<String>,
}

impl ScrollSpy {
    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active() == Some(id)
    }

    /// Applies one intersection callback batch, in delivery order.
    pub fn observe<'a, I>(&mut self, entries: I)
    where
        I: IntoIterator<Item = (&'a str, bool)>,
    {
        for (id, intersecting) in entries {
            if intersecting {
                self.active = Some(id.to_string());
            }
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CursorVariant {
    #[default]
    Default,
    Text,
    Link,
    Project,
}

impl CursorVariant {
    pub fn class(self) -> &'static str {
        match self {
            Self::Default => "cursor-default",
            Self::Text => "cursor-text",
            Self::Link => "cursor-link",
            Self::Project => "cursor-project",
        }
    }
}

/// What the pointer is over, reduced to the facts the classifier needs.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct HoverTarget {
    /// Upper-case tag name, as `Element.tagName` reports it.
    pub tag: String,
    /// `data-cursor` of the element or its closest ancestor carrying one.
    pub data_cursor: Option<String>,
    /// The element is, or is inside, an `a`, `button` or `[role=button]`.
    pub in_clickable: bool,
}

pub fn classify_cursor(target: &HoverTarget) -> CursorVariant {
    match target.data_cursor.as_deref() {
        Some("project") => return CursorVariant::Project,
        Some("link") => return CursorVariant::Link,
        Some("text") => return CursorVariant::Text,
        _ => {}
    }
    if target.in_clickable {
        return CursorVariant::Link;
    }
    match target.tag.as_str() {
        "A" | "BUTTON" => CursorVariant::Link,
        "INPUT" | "TEXTAREA" | "P" | "H1" | "H2" | "H3" | "H4" | "SPAN" | "LI" => {
            CursorVariant::Text
        }
        _ => CursorVariant::Default,
    }
}

/// Damped spring pulling a point toward a target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringFollower {
    pub x: f64,
    pub y: f64,
    vx: f64,
    vy: f64,
    stiffness: f64,
    damping: f64,
}

impl Default for SpringFollower {
    fn default() -> Self {
        Self::new(170.0, 26.0)
    }
}

impl SpringFollower {
    pub fn new(stiffness: f64, damping: f64) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            vx: 0.0,
            vy: 0.0,
            stiffness,
            damping,
        }
    }

    pub fn jump_to(&mut self, x: f64, y: f64) {
        self.x = x;
        self.y = y;
        self.vx = 0.0;
        self.vy = 0.0;
    }

    /// Advances by `dt_ms`. Long frames are split so a backgrounded tab
    /// doesn't make the spring explode when it resumes.
    pub fn step(&mut self, target_x: f64, target_y: f64, dt_ms: f64) {
        let mut remaining = (dt_ms / 1000.0).clamp(0.0, 0.25);
        while remaining > 0.0 {
            let dt = remaining.min(1.0 / 120.0);
            let ax = self.stiffness * (target_x - self.x) - self.damping * self.vx;
            let ay = self.stiffness * (target_y - self.y) - self.damping * self.vy;
            self.vx += ax * dt;
            self.vy += ay * dt;
            self.x += self.vx * dt;
            self.y += self.vy * dt;
            remaining -= dt;
        }
    }

    pub fn is_settled(&self, target_x: f64, target_y: f64) -> bool {
        (target_x - self.x).abs() < 0.5
            && (target_y - self.y).abs() < 0.5
            && self.vx.abs() < 0.5
            && self.vy.abs() < 0.5
    }
}

/// Inline style centring a `position: fixed` overlay on a point. The point
/// must be in viewport (client) coordinates, page coordinates drift by the
/// scroll offset.
pub fn overlay_transform(client_x: f64, client_y: f64) -> String {
    format!("transform: translate3d({client_x}px, {client_y}px, 0) translate(-50%, -50%)")
}

/// Body class under which focus rings are drawn.
pub const KEYBOARD_FOCUS_CLASS: &str = "using-keyboard";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusInput<'a> {
    Key(&'a str),
    PointerDown,
}

/// Focus rings turn on with Tab and off with any mouse press. Other keys
/// leave them as they are.
pub fn keyboard_focus(current: bool, input: FocusInput<'_>) -> bool {
    match input {
        FocusInput::Key("Tab") => true,
        FocusInput::Key(_) => current,
        FocusInput::PointerDown => false,
    }
}

/// Rotation `(x_deg, y_deg)` for a pointer at normalised card coordinates
/// (0..1 on each axis, 0.5 is the centre).
pub fn tilt_angles(x: f64, y: f64) -> (f64, f64) {
    let x = x.clamp(0.0, 1.0);
    let y = y.clamp(0.0, 1.0);
    let rotate_x = -((y - 0.5) * 2.0 * MAX_TILT_DEG);
    let rotate_y = (x - 0.5) * 2.0 * MAX_TILT_DEG;
    (rotate_x, rotate_y)
}

/// Ease-out cubic count-up. `progress` is clamped to 0..=1.
pub fn counter_value(target: u32, progress: f64) -> u32 {
    let p = progress.clamp(0.0, 1.0);
    let eased = 1.0 - (1.0 - p).powi(3);
    (f64::from(target) * eased).round() as u32
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    /// Horizontal position, percent of the container.
    pub left: f64,
    /// Vertical position, percent of the container.
    pub top: f64,
    /// Diameter in px.
    pub size: f64,
    /// Animation delay in seconds.
    pub delay: f64,
    /// Animation duration in seconds.
    pub duration: f64,
}

/// Deterministic particle layout so server and client render identical markup.
pub fn particle_field(count: usize, seed: u64) -> Vec<Particle> {
    let mut state = seed ^ 0x9E37_79B9_7F4A_7C15;
    let mut next = move || {
        // xorshift64*
        state ^= state >> 12;
        state ^= state << 25;
        state ^= state >> 27;
        let bits = state.wrapping_mul(0x2545_F491_4F6C_DD1D) >> 11;
        bits as f64 / (1u64 << 53) as f64
    };
    (0..count)
        .map(|_| Particle {
            left: next() * 100.0,
            top: next() * 100.0,
            size: 2.0 + next() * 4.0,
            delay: next() * 6.0,
            duration: 8.0 + next() * 12.0,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_thresholds() {
        assert!(!header_is_solid(0.0));
        assert!(!header_is_solid(10.0));
        assert!(header_is_solid(10.5));
        assert!(!scroll_top_visible(300.0));
        assert!(scroll_top_visible(301.0));
    }

    #[test]
    fn test_scroll_spy_takes_latest_intersecting() {
        let mut spy = ScrollSpy::default();
        assert_eq!(spy.active(), None);
        spy.observe([("home", true)]);
        assert!(spy.is_active("home"));
        spy.observe([("about", true), ("home", false)]);
        assert_eq!(spy.active(), Some("about"));
        spy.observe([("about", false)]);
        assert_eq!(spy.active(), Some("about"));
        spy.observe([("skills", true), ("projects", true)]);
        assert_eq!(spy.active(), Some("projects"));
    }

    fn target(tag: &str, data_cursor: Option<&str>, in_clickable: bool) -> HoverTarget {
        HoverTarget {
            tag: tag.to_string(),
            data_cursor: data_cursor.map(str::to_string),
            in_clickable,
        }
    }

    #[test]
    fn test_classify_cursor() {
        assert_eq!(classify_cursor(&target("DIV", None, false)), CursorVariant::Default);
        assert_eq!(classify_cursor(&target("A", None, true)), CursorVariant::Link);
        assert_eq!(classify_cursor(&target("BUTTON", None, false)), CursorVariant::Link);
        assert_eq!(classify_cursor(&target("svg", None, true)), CursorVariant::Link);
        assert_eq!(classify_cursor(&target("P", None, false)), CursorVariant::Text);
        assert_eq!(classify_cursor(&target("TEXTAREA", None, false)), CursorVariant::Text);
        assert_eq!(
            classify_cursor(&target("IMG", Some("project"), true)),
            CursorVariant::Project
        );
        assert_eq!(
            classify_cursor(&target("DIV", Some("unknown"), false)),
            CursorVariant::Default
        );
    }

    #[test]
    fn test_spring_converges() {
        let mut spring = SpringFollower::default();
        for _ in 0..240 {
            spring.step(100.0, -50.0, 16.0);
        }
        assert!(spring.is_settled(100.0, -50.0), "{spring:?}");
    }

    #[test]
    fn test_spring_survives_long_frames() {
        let mut spring = SpringFollower::default();
        spring.step(500.0, 500.0, 60_000.0);
        assert!(spring.x.is_finite() && spring.y.is_finite());
        assert!(spring.x > 0.0 && spring.x < 1000.0);
    }

    #[test]
    fn test_spring_jump() {
        let mut spring = SpringFollower::default();
        spring.jump_to(3.0, 4.0);
        assert!(spring.is_settled(3.0, 4.0));
    }

    #[test]
    fn test_tilt_bounds() {
        assert_eq!(tilt_angles(0.5, 0.5), (0.0, 0.0));
        assert_eq!(tilt_angles(1.0, 0.0), (MAX_TILT_DEG, MAX_TILT_DEG));
        assert_eq!(tilt_angles(0.0, 1.0), (-MAX_TILT_DEG, -MAX_TILT_DEG));
        let (rx, ry) = tilt_angles(7.0, -3.0);
        assert!(rx.abs() <= MAX_TILT_DEG && ry.abs() <= MAX_TILT_DEG);
    }

    #[test]
    fn test_parallax() {
        assert_eq!(parallax_offset(200.0, 0.5), 100.0);
        assert_eq!(parallax_offset(-20.0, 0.5), 0.0);
    }

    #[test]
    fn test_counter_endpoints() {
        assert_eq!(counter_value(40, 0.0), 0);
        assert_eq!(counter_value(40, 1.0), 40);
        assert_eq!(counter_value(40, 3.0), 40);
        assert!(counter_value(40, 0.5) > 20);
        let values: Vec<u32> = (0..=10).map(|i| counter_value(15, i as f64 / 10.0)).collect();
        assert!(values.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_particle_field_is_deterministic() {
        let a = particle_field(30, 7);
        let b = particle_field(30, 7);
        assert_eq!(a, b);
        assert_ne!(a, particle_field(30, 8));
        for p in a {
            assert!((0.0..100.0).contains(&p.left));
            assert!((0.0..100.0).contains(&p.top));
            assert!((2.0..6.0).contains(&p.size));
        }
    }

    #[test]
    fn test_overlay_transform_uses_given_point() {
        assert_eq!(
            overlay_transform(120.0, 48.5),
            "transform: translate3d(120px, 48.5px, 0) translate(-50%, -50%)"
        );
    }

    #[test]
    fn test_keyboard_focus_toggling() {
        assert!(keyboard_focus(false, FocusInput::Key("Tab")));
        assert!(keyboard_focus(true, FocusInput::Key("Enter")));
        assert!(!keyboard_focus(false, FocusInput::Key("a")));
        assert!(!keyboard_focus(true, FocusInput::PointerDown));
        assert!(!keyboard_focus(false, FocusInput::PointerDown));
    }
}
