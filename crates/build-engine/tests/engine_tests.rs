use build_engine::types::EngineError;
use build_engine::Engine;
use deck_types::{
    BoardDirection, DeckShape, DeckSpec, MaterialKind, RailingStyle, StairType,
};

fn bare_deck() -> DeckSpec {
    DeckSpec {
        shape: DeckShape::Rectangular,
        width: 12.0,
        length: 12.0,
        height: 1.0,
        board_direction: BoardDirection::Horizontal,
        railings: false,
        show_dimensions: false,
        ..DeckSpec::default()
    }
}

fn count_kind(engine: &Engine, kind: MaterialKind) -> usize {
    engine
        .last_build()
        .map(|b| {
            b.primitives
                .iter()
                .filter(|p| p.material == kind)
                .count()
        })
        .unwrap_or(0)
}

// ── Rebuild ────────────────────────────────────────────────────────────────

#[test]
fn bare_deck_counts() {
    let mut engine = Engine::new();
    engine.apply_spec(bare_deck()).unwrap();

    // 8 interior joists + 2 rims, 24 board rows of one 12 ft segment.
    assert_eq!(count_kind(&engine, MaterialKind::Joist), 10);
    assert_eq!(count_kind(&engine, MaterialKind::Board), 24);
    let build = engine.last_build().unwrap();
    assert!(build.errors.is_empty());
    assert!((build.square_footage - 144.0).abs() < 1e-9);
}

#[test]
fn rebuild_is_idempotent() {
    let mut engine = Engine::new();
    engine.apply_spec(bare_deck()).unwrap();
    let first = engine.last_build().unwrap().clone();
    engine.rebuild();
    let second = engine.last_build().unwrap();

    assert_eq!(first.primitives.len(), second.primitives.len());
    assert_eq!(first.tally, second.tally);
    assert_eq!(first.total_cost, second.total_cost);
}

#[test]
fn l_shape_builds_both_sections() {
    let mut engine = Engine::new();
    let rect_boards = {
        engine.apply_spec(bare_deck()).unwrap();
        count_kind(&engine, MaterialKind::Board)
    };

    engine
        .apply_spec(DeckSpec {
            shape: DeckShape::LShaped,
            ..bare_deck()
        })
        .unwrap();
    // The wing adds its own boards and joists on top of the primary's.
    assert!(count_kind(&engine, MaterialKind::Board) > rect_boards);
    let build = engine.last_build().unwrap();
    assert!((build.square_footage - (144.0 + 36.0)).abs() < 1e-9);
}

#[test]
fn railing_style_changes_radius_not_layout() {
    let mut engine = Engine::new();
    engine
        .apply_spec(DeckSpec {
            railings: true,
            railing_style: RailingStyle::Standard,
            ..bare_deck()
        })
        .unwrap();
    let standard_posts = count_kind(&engine, MaterialKind::RailingPost);
    let standard_total = engine.last_build().unwrap().primitives.len();

    engine
        .apply_spec(DeckSpec {
            railings: true,
            railing_style: RailingStyle::Cable,
            ..bare_deck()
        })
        .unwrap();
    assert_eq!(count_kind(&engine, MaterialKind::RailingPost), standard_posts);
    assert_eq!(engine.last_build().unwrap().primitives.len(), standard_total);
}

#[test]
fn stairs_add_treads_and_cost() {
    let mut engine = Engine::new();
    engine.apply_spec(bare_deck()).unwrap();
    let base_cost = engine.last_build().unwrap().total_cost;

    engine
        .apply_spec(DeckSpec {
            stairs: true,
            stair_steps: 3,
            stair_type: StairType::Straight,
            ..bare_deck()
        })
        .unwrap();
    assert!(count_kind(&engine, MaterialKind::Stair) > 0);
    // Three steps at $50 each plus waste.
    let with_stairs = engine.last_build().unwrap().total_cost;
    assert!(with_stairs > base_cost + 150.0);
}

#[test]
fn invalid_spec_is_rejected_and_keeps_last_build() {
    let mut engine = Engine::new();
    engine.apply_spec(bare_deck()).unwrap();
    let before = engine.last_build().unwrap().primitives.len();

    let result = engine.apply_spec(DeckSpec {
        width: -5.0,
        ..bare_deck()
    });
    assert!(matches!(result, Err(EngineError::InvalidSpec { .. })));
    assert_eq!(engine.last_build().unwrap().primitives.len(), before);
    assert_eq!(engine.spec().width, 12.0);
}

#[test]
fn dimension_labels_follow_the_toggle() {
    let mut engine = Engine::new();
    engine
        .apply_spec(DeckSpec {
            show_dimensions: true,
            ..bare_deck()
        })
        .unwrap();
    assert_eq!(count_kind(&engine, MaterialKind::Label), 2);

    engine.apply_spec(bare_deck()).unwrap();
    assert_eq!(count_kind(&engine, MaterialKind::Label), 0);
}

// ── Undo / redo ────────────────────────────────────────────────────────────

#[test]
fn undo_restores_the_previous_spec_and_geometry() {
    let mut engine = Engine::new();
    engine.apply_spec(bare_deck()).unwrap();
    let small = count_kind(&engine, MaterialKind::Board);

    engine
        .apply_spec(DeckSpec {
            length: 24.0,
            ..bare_deck()
        })
        .unwrap();
    assert!(count_kind(&engine, MaterialKind::Board) > small);

    engine.undo().unwrap();
    assert_eq!(engine.spec().length, 12.0);
    assert_eq!(count_kind(&engine, MaterialKind::Board), small);
}

#[test]
fn redo_reapplies_an_undone_edit() {
    let mut engine = Engine::new();
    engine.apply_spec(bare_deck()).unwrap();
    engine
        .apply_spec(DeckSpec {
            length: 24.0,
            ..bare_deck()
        })
        .unwrap();
    engine.undo().unwrap();

    assert!(engine.can_redo());
    engine.redo().unwrap();
    assert_eq!(engine.spec().length, 24.0);
}

#[test]
fn new_edit_after_undo_discards_redo() {
    let mut engine = Engine::new();
    engine.apply_spec(bare_deck()).unwrap();
    engine
        .apply_spec(DeckSpec {
            length: 24.0,
            ..bare_deck()
        })
        .unwrap();
    engine.undo().unwrap();

    engine
        .apply_spec(DeckSpec {
            width: 20.0,
            ..bare_deck()
        })
        .unwrap();
    assert!(!engine.can_redo());
    assert!(matches!(engine.redo(), Err(EngineError::NothingToRedo)));
}

#[test]
fn undo_at_the_start_is_an_error() {
    let mut engine = Engine::new();
    assert!(matches!(engine.undo(), Err(EngineError::NothingToUndo)));
}
