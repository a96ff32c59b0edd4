use quadgrid::{
    BreakpointConfig, GridSystem, MemorySurface, NodeId, RenderSurface, ResizeBus, StyleProperty,
    viewport_width,
};

use std::cell::RefCell;
use std::rc::Rc;

fn build_page() -> (MemorySurface, NodeId, Vec<NodeId>) {
    let mut surface = MemorySurface::new();
    let root = surface.document_root();
    surface.set_measured_width(root, 1280.0);
    surface.set_avail_width(Some(1280.0));

    let header = surface.add_child(root, &["cont", "header"]);
    let grid = surface.add_child(root, &["grid"]);
    surface.set_measured_width(grid, 1280.0);

    let mut cols = Vec::new();
    for (class, height) in [
        ("col-2-4", 120.0),
        ("col-2-4", 180.0),
        ("col-1-4", 90.0),
        ("col-1-4", 90.0),
        ("col-2-4", 140.0),
    ] {
        let col = surface.add_child(grid, &[class, "card"]);
        surface.set_intrinsic_height(col, height);
        cols.push(col);
    }

    (surface, header, cols)
}

fn dump(surface: &MemorySurface, header: NodeId, cols: &[NodeId]) {
    println!(
        "  header breakpoint = {:?}",
        surface.attribute(header, "breakpoint")
    );
    for (i, &col) in cols.iter().enumerate() {
        let width = surface.style(col, StyleProperty::Width);
        let height = surface.style(col, StyleProperty::Height);
        let left = surface.style(col, StyleProperty::MarginLeft);
        println!("  col {i}: width {width:?}, height {height:?}, margin-left {left:?}");
    }
}

fn main() {
    if let Err(e) = try_main() {
        eprintln!("{e:?}");
        std::process::exit(1);
    }
}

fn try_main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_target(false).init();

    let config = BreakpointConfig::from_json_str(
        r#"{
            "default": { "gutter": "2%", "col-2-4": 50, "col-1-4": 25 },
            "600":     { "gutter": "2%", "col-2-4": 100, "col-1-4": 50 },
            "400":     { "gutter": "0%", "col-2-4": 100, "col-1-4": 100 }
        }"#,
    )?;
    config.validate()?;

    let (mut surface, header, cols) = build_page();
    println!("viewport: {}", viewport_width(&surface));

    let grid = Rc::new(RefCell::new(GridSystem::new(
        &mut surface,
        Some(config),
        None,
    )?));

    println!("after construction (1280 wide):");
    dump(&surface, header, &cols);

    // The host owns resize delivery; the grid only subscribes.
    let bus = ResizeBus::new();
    let subscription = GridSystem::attach(Rc::clone(&grid), &bus);

    for width in [560.0, 360.0] {
        let root = surface.document_root();
        surface.set_measured_width(root, width);
        let grid_el = grid.borrow().snapshot().grid_root.expect("grid element");
        surface.set_measured_width(grid_el, width);
        bus.notify(&mut surface);
        println!("after resize to {width}:");
        dump(&surface, header, &cols);
    }

    subscription.detach();
    Ok(())
}
