/// How a handle should repaint after its data changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Redraw {
    Animated,
    /// Repaint in place with no transition. Used for every live refresh.
    Immediate,
}

/// Series configuration a chart is created with.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartConfig {
    pub series_label: String,
    pub labels: Vec<String>,
    pub values: Vec<Option<f64>>,
    pub accent: String,
    pub fill: bool,
    /// Curve smoothing, 0 draws straight segments.
    pub tension: f64,
    pub point_radius: f64,
}

impl ChartConfig {
    pub fn trend(series_label: impl Into<String>, accent: impl Into<String>) -> Self {
        Self {
            series_label: series_label.into(),
            labels: Vec::new(),
            values: Vec::new(),
            accent: accent.into(),
            fill: true,
            tension: 0.4,
            point_radius: 4.0,
        }
    }

    pub fn with_data(mut self, labels: Vec<String>, values: Vec<Option<f64>>) -> Self {
        self.labels = labels;
        self.values = values;
        self
    }

    /// Accent at 20% alpha, for the area under the line.
    pub fn fill_color(&self) -> String {
        format!("{}33", self.accent)
    }
}

/// A live chart owned by exactly one view.
pub trait ChartHandle {
    /// Replace the label array and the first series' data in place.
    fn set_data(&mut self, labels: Vec<String>, values: Vec<Option<f64>>);
    fn redraw(&mut self, mode: Redraw);
}

/// Builds chart handles. Called at most once per view.
pub trait ChartBackend {
    type Handle: ChartHandle;

    fn create(&mut self, config: ChartConfig) -> Self::Handle;
}

pub const CHART_WIDTH: f64 = 800.0;
pub const CHART_HEIGHT: f64 = 320.0;
const PAD_LEFT: f64 = 48.0;
const PAD_RIGHT: f64 = 16.0;
const PAD_TOP: f64 = 16.0;
const PAD_BOTTOM: f64 = 32.0;
const MAX_X_LABELS: usize = 8;
const Y_TICKS: usize = 5;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartGeometry {
    pub line_paths: Vec<String>,
    pub area_paths: Vec<String>,
    pub points: Vec<(f64, f64)>,
    pub x_labels: Vec<(f64, String)>,
    pub y_ticks: Vec<(f64, String)>,
    pub baseline: f64,
}

/// Line chart rendered as SVG by the history page.
#[derive(Debug, Clone, PartialEq)]
pub struct SvgTrendChart {
    config: ChartConfig,
    revision: u64,
    last_redraw: Option<Redraw>,
}

impl SvgTrendChart {
    pub fn new(config: ChartConfig) -> Self {
        Self {
            config,
            revision: 0,
            last_redraw: Some(Redraw::Animated),
        }
    }

    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    pub fn labels(&self) -> &[String] {
        &self.config.labels
    }

    pub fn values(&self) -> &[Option<f64>] {
        &self.config.values
    }

    /// Bumped on every redraw.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn last_redraw(&self) -> Option<Redraw> {
        self.last_redraw
    }

    fn y_range(&self) -> Option<(f64, f64)> {
        let mut it = self.config.values.iter().flatten().copied();
        let first = it.next()?;
        let (lo, hi) = it.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v)));
        if (hi - lo).abs() < f64::EPSILON {
            Some((lo - 1.0, hi + 1.0))
        } else {
            let pad = (hi - lo) * 0.1;
            Some((lo - pad, hi + pad))
        }
    }

    pub fn geometry(&self) -> ChartGeometry {
        let plot_w = CHART_WIDTH - PAD_LEFT - PAD_RIGHT;
        let plot_h = CHART_HEIGHT - PAD_TOP - PAD_BOTTOM;
        let baseline = PAD_TOP + plot_h;
        let mut geo = ChartGeometry {
            baseline,
            ..Default::default()
        };
        let n = self.config.labels.len().max(self.config.values.len());
        if n == 0 {
            return geo;
        }
        let x_at = |i: usize| {
            if n == 1 {
                PAD_LEFT + plot_w / 2.0
            } else {
                PAD_LEFT + plot_w * (i as f64) / ((n - 1) as f64)
            }
        };

        let step = n.div_ceil(MAX_X_LABELS).max(1);
        geo.x_labels = self
            .config
            .labels
            .iter()
            .enumerate()
            .filter(|(i, _)| i % step == 0)
            .map(|(i, l)| (x_at(i), l.clone()))
            .collect();

        let Some((lo, hi)) = self.y_range() else {
            return geo;
        };
        let y_at = |v: f64| PAD_TOP + plot_h * (1.0 - (v - lo) / (hi - lo));
        geo.y_ticks = (0..Y_TICKS)
            .map(|k| {
                let v = lo + (hi - lo) * (k as f64) / ((Y_TICKS - 1) as f64);
                (y_at(v), format!("{v:.1}"))
            })
            .collect();

        // Gaps split the series into separate runs.
        let mut runs: Vec<Vec<(f64, f64)>> = Vec::new();
        let mut current = Vec::new();
        for (i, v) in self.config.values.iter().enumerate() {
            match v {
                Some(v) => current.push((x_at(i), y_at(*v))),
                None if !current.is_empty() => runs.push(std::mem::take(&mut current)),
                None => {}
            }
        }
        if !current.is_empty() {
            runs.push(current);
        }

        for run in &runs {
            let line = smooth_path(run, self.config.tension);
            if self.config.fill {
                let (first_x, _) = run[0];
                let (last_x, _) = run[run.len() - 1];
                geo.area_paths.push(format!(
                    "{line} L {last_x:.2} {baseline:.2} L {first_x:.2} {baseline:.2} Z"
                ));
            }
            geo.line_paths.push(line);
            geo.points.extend(run.iter().copied());
        }
        geo
    }
}

/// Cardinal spline through `pts` as cubic Bézier segments.
fn smooth_path(pts: &[(f64, f64)], tension: f64) -> String {
    let (x0, y0) = pts[0];
    let mut d = format!("M {x0:.2} {y0:.2}");
    for i in 0..pts.len() - 1 {
        let p0 = pts[i.saturating_sub(1)];
        let p1 = pts[i];
        let p2 = pts[i + 1];
        let p3 = pts[(i + 2).min(pts.len() - 1)];
        let k = tension / 2.0;
        let c1 = (p1.0 + (p2.0 - p0.0) * k, p1.1 + (p2.1 - p0.1) * k);
        let c2 = (p2.0 - (p3.0 - p1.0) * k, p2.1 - (p3.1 - p1.1) * k);
        d.push_str(&format!(
            " C {:.2} {:.2} {:.2} {:.2} {:.2} {:.2}",
            c1.0, c1.1, c2.0, c2.1, p2.0, p2.1
        ));
    }
    d
}

impl ChartHandle for SvgTrendChart {
    fn set_data(&mut self, labels: Vec<String>, values: Vec<Option<f64>>) {
        self.config.labels = labels;
        self.config.values = values;
    }

    fn redraw(&mut self, mode: Redraw) {
        self.revision += 1;
        self.last_redraw = Some(mode);
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SvgChartBackend;

impl ChartBackend for SvgChartBackend {
    type Handle = SvgTrendChart;

    fn create(&mut self, config: ChartConfig) -> SvgTrendChart {
        SvgTrendChart::new(config)
    }
}
