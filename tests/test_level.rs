use std::fs;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use the_forest::config::TILE_SIZE;
use the_forest::entities::{EntityKind, Rect};
use the_forest::error::LevelError;
use the_forest::level::*;

// ── parse_grid ────────────────────────────────────────────────────────────────

#[test]
fn short_rows_are_padded_with_dots() {
    let g = parse_grid("@..\n-\n--").unwrap();
    let rows: Vec<String> = g.rows().collect();
    assert_eq!(rows, vec!["@..", "-..", "--."]);
    assert_eq!(g.width(), 3);
    assert_eq!(g.height(), 3);
}

#[test]
fn trailing_whitespace_is_stripped() {
    let g = parse_grid("@.   \r\n--\t\n").unwrap();
    let rows: Vec<String> = g.rows().collect();
    assert_eq!(rows, vec!["@.", "--"]);
}

#[test]
fn blank_lines_become_empty_rows() {
    let g = parse_grid("\n\n@\n-").unwrap();
    let rows: Vec<String> = g.rows().collect();
    assert_eq!(rows, vec![".", ".", "@", "-"]);
}

#[test]
fn empty_text_is_rejected() {
    assert!(matches!(parse_grid(""), Err(LevelError::Empty)));
}

#[test]
fn final_newline_does_not_add_a_row() {
    let g = parse_grid("@\n-\n").unwrap();
    assert_eq!(g.height(), 2);

    let g = parse_grid("@\n-\n\n").unwrap();
    assert_eq!(g.rows().collect::<Vec<_>>(), vec!["@", "-", "."]);
}

#[test]
fn padded_rows_all_match_longest_row() {
    let mut rng = StdRng::seed_from_u64(42);
    let alphabet = ['.', '-', '#', 'x', 'f', '='];

    for _ in 0..200 {
        let row_count = rng.gen_range(1..12);
        let rows: Vec<String> = (0..row_count)
            .map(|i| {
                // A blank last row would be swallowed by the line split.
                let min = if i + 1 == row_count { 1 } else { 0 };
                let len = rng.gen_range(min..40);
                (0..len)
                    .map(|_| alphabet[rng.gen_range(0..alphabet.len())])
                    .collect()
            })
            .collect();
        let longest = rows.iter().map(|r| r.len()).max().unwrap();

        let grid = parse_grid(&rows.join("\n")).unwrap();
        assert_eq!(grid.height(), rows.len());
        assert_eq!(grid.width(), longest);
        for (padded, original) in grid.rows().zip(&rows) {
            assert_eq!(padded.len(), longest);
            assert!(padded.starts_with(original.as_str()));
            assert!(padded[original.len()..].chars().all(|c| c == '.'));
        }
    }
}

// ── load_level ────────────────────────────────────────────────────────────────

#[test]
fn load_level_reads_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("lvl.txt");
    fs::write(&path, "@..f\n----\n").unwrap();

    let g = load_level(&path).unwrap();
    assert_eq!(g.rows().collect::<Vec<_>>(), vec!["@..f", "----"]);
}

#[test]
fn load_level_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.txt");

    match load_level(&path) {
        Err(LevelError::Io { path: p, .. }) => assert_eq!(p, path),
        other => panic!("expected Io error, got {:?}", other),
    }
}

// ── generate_level ────────────────────────────────────────────────────────────

#[test]
fn scenario_row_places_player_hazard_and_goal() {
    let g = parse_grid("@...x...f\n---------").unwrap();
    let s = generate_level(&g, 0, 1).unwrap();

    assert_eq!(s.player.rect, Rect::new(0, 8, 40, 56));
    assert_eq!(s.world.ground().count(), 9);

    let hazard = s.world.hazards().next().unwrap();
    assert_eq!(hazard.rect.x, 4 * TILE_SIZE + 10);
    assert_eq!(hazard.rect.bottom(), TILE_SIZE);

    let goal = s.world.goals().next().unwrap();
    assert!(goal.rect.x > 8 * TILE_SIZE);
    assert!(goal.rect.right() < 9 * TILE_SIZE);
}

#[test]
fn ground_tiles_keep_their_glyph() {
    let g = parse_grid("@.\n-#").unwrap();
    let s = generate_level(&g, 0, 1).unwrap();
    let kinds: Vec<EntityKind> = s.world.ground().map(|e| e.kind).collect();
    assert_eq!(kinds, vec![EntityKind::Ground('-'), EntityKind::Ground('#')]);
    assert_eq!(s.world.entities[1].rect, Rect::new(64, 64, 64, 64));
}

#[test]
fn spaces_are_empty_cells() {
    let g = parse_grid("@ .\n- -").unwrap();
    let s = generate_level(&g, 0, 1).unwrap();
    assert_eq!(s.world.entities.len(), 2);
}

#[test]
fn missing_spawn_is_rejected() {
    let g = parse_grid("...\n---").unwrap();
    assert!(matches!(generate_level(&g, 0, 1), Err(LevelError::MissingSpawn)));
}

#[test]
fn multiple_spawns_are_rejected() {
    let g = parse_grid("@.@\n---\n..@").unwrap();
    assert!(matches!(
        generate_level(&g, 0, 1),
        Err(LevelError::MultipleSpawns { count: 3 })
    ));
}

#[test]
fn generated_state_records_level_position() {
    let g = parse_grid("@\n-").unwrap();
    let s = generate_level(&g, 1, 3).unwrap();
    assert_eq!(s.level_index, 1);
    assert_eq!(s.level_count, 3);
    assert_eq!(s.frame, 0);
}

#[test]
fn bundled_levels_are_valid() {
    let dir = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("levels");
    for name in the_forest::config::DEFAULT_LEVELS {
        let g = load_level(&dir.join(name)).unwrap();
        assert!(generate_level(&g, 0, 3).is_ok(), "{name}");
        assert!(g.height() as i32 * TILE_SIZE <= the_forest::config::SCREEN_HEIGHT);
    }
}
