use crate::analysis::cooccurrence::UserGraph;
use crate::core::graph::Graph;
use crate::core::ids::NodeId;
use crate::export::error::ExportError;
use ab_glyph::{FontRef, PxScale};
use image::{ImageFormat, Rgb, RgbImage};
use imageproc::drawing::{
    draw_filled_circle_mut, draw_line_segment_mut, draw_text_mut, text_size,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::info;

// 12 x 8 inches at 100 dpi
const WIDTH: u32 = 1200;
const HEIGHT: u32 = 800;
const MARGIN: f64 = 60.0;
const NODE_RADIUS: i32 = 12;

const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);
const EDGE_COLOR: Rgb<u8> = Rgb([96, 96, 96]);
const NODE_COLOR: Rgb<u8> = Rgb([173, 216, 230]);
const TEXT_COLOR: Rgb<u8> = Rgb([0, 0, 0]);

static FONT: &[u8] = include_bytes!("../../assets/DejaVuSans.ttf");
const TITLE: &str = "Information Spread Network";
const TITLE_TOP: i32 = 20;
const TITLE_SCALE: PxScale = PxScale { x: 20.0, y: 20.0 };
// 8 pt at 100 dpi
const LABEL_SCALE: PxScale = PxScale { x: 11.0, y: 11.0 };

const MIN_DISTANCE: f64 = 0.01;

pub struct LayoutConfig {
    pub iterations: usize,
    pub seed: u64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            iterations: 50,
            seed: 42,
        }
    }
}

/// Fruchterman-Reingold force-directed layout. Positions are centred on the
/// origin and scaled so the furthest coordinate sits at 1.
pub fn spring_layout(graph: &Graph, cfg: &LayoutConfig) -> Vec<(f64, f64)> {
    let n = graph.node_count();
    if n == 0 {
        return vec![];
    }
    if n == 1 {
        return vec![(0.0, 0.0)];
    }

    let mut rng = StdRng::seed_from_u64(cfg.seed);
    let mut pos = (0..n)
        .map(|_| (rng.random_range(0.0..1.0), rng.random_range(0.0..1.0)))
        .collect::<Vec<(f64, f64)>>();

    // optimal distance between nodes
    let k = (1.0 / n as f64).sqrt();
    let mut temperature = 0.1;
    let cooling = temperature / (cfg.iterations as f64 + 1.0);
    let mut disp = vec![(0.0, 0.0); n];

    for _ in 0..cfg.iterations {
        for (i, d) in disp.iter_mut().enumerate() {
            *d = (0.0, 0.0);
            let neighbors = graph.neighbors(i as NodeId);
            for j in 0..n {
                if i == j {
                    continue;
                }
                let (dx, dy) = (pos[i].0 - pos[j].0, pos[i].1 - pos[j].1);
                let dist = dx.hypot(dy).max(MIN_DISTANCE);
                let mut force = k * k / (dist * dist);
                if neighbors.binary_search(&(j as NodeId)).is_ok() {
                    force -= dist / k;
                }
                d.0 += dx * force;
                d.1 += dy * force;
            }
        }
        for (p, d) in pos.iter_mut().zip(&disp) {
            let len = d.0.hypot(d.1).max(MIN_DISTANCE);
            p.0 += d.0 * temperature / len;
            p.1 += d.1 * temperature / len;
        }
        temperature -= cooling;
    }

    rescale(&mut pos);
    pos
}

fn rescale(pos: &mut [(f64, f64)]) {
    let n = pos.len() as f64;
    let cx = pos.iter().map(|p| p.0).sum::<f64>() / n;
    let cy = pos.iter().map(|p| p.1).sum::<f64>() / n;
    let mut lim: f64 = 0.0;
    for p in pos.iter_mut() {
        p.0 -= cx;
        p.1 -= cy;
        lim = lim.max(p.0.abs()).max(p.1.abs());
    }
    if lim > 0.0 {
        for p in pos.iter_mut() {
            p.0 /= lim;
            p.1 /= lim;
        }
    }
}

fn to_pixel((x, y): (f64, f64)) -> (i32, i32) {
    let px = MARGIN + (x + 1.0) / 2.0 * (WIDTH as f64 - 2.0 * MARGIN);
    let py = MARGIN + (1.0 - y) / 2.0 * (HEIGHT as f64 - 2.0 * MARGIN);
    (px.round() as i32, py.round() as i32)
}

/// Draws `text` horizontally centred on `center_x`, with its top at `top`.
fn draw_centered_text(
    image: &mut RgbImage,
    font: &FontRef,
    scale: PxScale,
    center_x: i32,
    top: i32,
    text: &str,
) {
    let (w, _) = text_size(scale, font, text);
    draw_text_mut(image, TEXT_COLOR, center_x - w as i32 / 2, top, scale, font, text);
}

pub fn render_network(
    user_graph: &UserGraph,
    positions: &[(f64, f64)],
) -> Result<RgbImage, ExportError> {
    let font = FontRef::try_from_slice(FONT)?;
    let graph = &user_graph.graph;
    let mut image = RgbImage::from_pixel(WIDTH, HEIGHT, BACKGROUND);
    let pixels = positions.iter().map(|p| to_pixel(*p)).collect::<Vec<_>>();

    for (u, v) in graph.edges() {
        let (from, to) = (pixels[u as usize], pixels[v as usize]);
        draw_line_segment_mut(
            &mut image,
            (from.0 as f32, from.1 as f32),
            (to.0 as f32, to.1 as f32),
            EDGE_COLOR,
        );
    }
    for center in &pixels {
        draw_filled_circle_mut(&mut image, *center, NODE_RADIUS, NODE_COLOR);
    }
    for (node, center) in pixels.iter().enumerate() {
        let name = user_graph.registry.name(node as NodeId);
        let top = center.1 - LABEL_SCALE.y as i32 / 2;
        draw_centered_text(&mut image, &font, LABEL_SCALE, center.0, top, name);
    }
    draw_centered_text(&mut image, &font, TITLE_SCALE, WIDTH as i32 / 2, TITLE_TOP, TITLE);

    Ok(image)
}

pub fn export_plot(
    path: &Path,
    user_graph: &UserGraph,
    cfg: &LayoutConfig,
) -> Result<(), ExportError> {
    let positions = spring_layout(&user_graph.graph, cfg);
    let image = render_network(user_graph, &positions)?;

    let mut writer = BufWriter::new(File::create(path)?);
    image.write_to(&mut writer, ImageFormat::Png)?;
    writer.flush()?;
    info!(
        path = %path.display(),
        nodes = user_graph.graph.node_count(),
        "network plot written"
    );
    Ok(())
}
