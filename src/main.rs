//! Vector Simplify (Kommandozeile).
//!
//! Lädt einen Layer, selektiert alle Features über ein Rechteck über den
//! ganzen Viewport, vereinfacht sie mit der angegebenen Toleranz und
//! speichert das Ergebnis, sofern kein Feature fehlgeschlagen ist.

use std::path::PathBuf;

use anyhow::{bail, Context};
use geo::{Coord, Rect};
use glam::Vec2;
use vector_simplify_editor::{
    MapCanvas, MapViewport, MemoryLayer, PointerButton, SimplifyController, ToleranceUnit,
    ToolIntent, ToolServices, TomlSettingsStore, VectorLayer,
};

/// Viewport-Größe der simulierten Karte.
const VIEWPORT_SIZE: Vec2 = Vec2::new(1000.0, 1000.0);

const USAGE: &str = "vector-simplify <layer.toml> <tolerance> [unit] [--out path]";

fn main() -> anyhow::Result<()> {
    // Logger initialisieren
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("Vector Simplify v{} startet...", env!("CARGO_PKG_VERSION"));

    let args = CliArgs::parse(std::env::args().skip(1))?;
    run(args)
}

struct CliArgs {
    layer_path: PathBuf,
    tolerance: f64,
    unit: Option<ToleranceUnit>,
    out_path: Option<PathBuf>,
}

impl CliArgs {
    fn parse(args: impl Iterator<Item = String>) -> anyhow::Result<Self> {
        let mut positional = Vec::new();
        let mut out_path = None;
        let mut args = args;
        while let Some(arg) = args.next() {
            if arg == "--out" {
                let path = args.next().context("--out erwartet einen Pfad")?;
                out_path = Some(PathBuf::from(path));
            } else {
                positional.push(arg);
            }
        }

        let (layer_path, tolerance, unit) = match positional.as_slice() {
            [layer, tolerance] => (layer, tolerance, None),
            [layer, tolerance, unit] => {
                (layer, tolerance, Some(unit.parse::<ToleranceUnit>()?))
            }
            _ => bail!("Aufruf: {}", USAGE),
        };

        Ok(Self {
            layer_path: PathBuf::from(layer_path),
            tolerance: tolerance
                .parse()
                .with_context(|| format!("Ungültige Toleranz: '{}'", tolerance))?,
            unit,
            out_path,
        })
    }
}

fn run(args: CliArgs) -> anyhow::Result<()> {
    let layer = MemoryLayer::load_from_file(&args.layer_path)?;
    let viewport = viewport_for(&layer)?;

    let mut controller =
        SimplifyController::new(ToolServices::with_settings(TomlSettingsStore::open(
            TomlSettingsStore::config_path(),
        )));
    let mut state = controller.create_state(MapCanvas::new(viewport).with_layer(layer));

    if let Some(unit) = args.unit {
        controller.handle_intent(
            &mut state,
            ToolIntent::ToleranceUnitSelected { index: unit.index() },
        )?;
    }
    controller.handle_intent(
        &mut state,
        ToolIntent::ToleranceEdited {
            value: args.tolerance,
        },
    )?;

    // Rechteck über den ganzen Viewport aufziehen
    controller.handle_intent(
        &mut state,
        ToolIntent::PointerPressed {
            button: PointerButton::Primary,
            screen_pos: Vec2::ZERO,
        },
    )?;
    controller.handle_intent(
        &mut state,
        ToolIntent::PointerMoved {
            primary_held: true,
            screen_pos: VIEWPORT_SIZE,
        },
    )?;
    controller.handle_intent(
        &mut state,
        ToolIntent::PointerReleased {
            button: PointerButton::Primary,
            screen_pos: VIEWPORT_SIZE,
        },
    )?;

    for notification in state.take_notifications() {
        eprintln!("{}", notification);
    }
    if !state.is_preview_active() {
        bail!("Keine Features selektiert");
    }

    println!("{}", state.status_text());
    if !state.preview.can_commit() {
        bail!("Vereinfachung fehlgeschlagen, Layer bleibt unverändert");
    }

    controller.handle_intent(&mut state, ToolIntent::CommitRequested)?;

    let out_path = args.out_path.unwrap_or(args.layer_path);
    let layer = state
        .canvas
        .current_layer()
        .context("Layer nach dem Speichern nicht mehr vorhanden")?;
    MemoryLayer::snapshot(layer).save_to_file(&out_path)?;
    Ok(())
}

/// Viewport, der die Layer-Ausdehnung mit etwas Rand zeigt.
fn viewport_for(layer: &MemoryLayer) -> anyhow::Result<MapViewport> {
    let extent = layer.extent().context("Layer enthält keine Features")?;
    let scale = layer.map_units_per_layer_unit();
    let pad = (extent.width().max(extent.height()) * scale * 0.05).max(1e-6);
    let map_extent = Rect::new(
        Coord {
            x: extent.min().x * scale - pad,
            y: extent.min().y * scale - pad,
        },
        Coord {
            x: extent.max().x * scale + pad,
            y: extent.max().y * scale + pad,
        },
    );
    Ok(MapViewport::fit_to_rect(map_extent, VIEWPORT_SIZE))
}
