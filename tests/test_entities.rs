use the_forest::config::*;
use the_forest::entities::*;

#[test]
fn rect_edges() {
    let r = Rect::new(10, 20, 40, 56);
    assert_eq!(r.right(), 50);
    assert_eq!(r.bottom(), 76);
    assert_eq!(r.center_x(), 30);
}

#[test]
fn set_bottom_moves_box_keeping_size() {
    let mut r = Rect::new(0, 0, 40, 56);
    r.set_bottom(128);
    assert_eq!(r.y, 72);
    assert_eq!(r.h, 56);
    assert_eq!(r.bottom(), 128);
}

#[test]
fn touching_boxes_do_not_overlap() {
    let a = Rect::new(0, 0, 64, 64);
    assert!(!a.overlaps(&Rect::new(64, 0, 64, 64))); // side by side
    assert!(!a.overlaps(&Rect::new(0, 64, 64, 64))); // stacked
    assert!(a.overlaps(&Rect::new(63, 63, 64, 64)));
}

#[test]
fn hazard_is_inset_and_bottom_anchored() {
    let e = Entity::hazard(4, 0);
    assert_eq!(e.kind, EntityKind::Hazard);
    assert_eq!(e.rect.x, 4 * TILE_SIZE + HAZARD_INSET);
    assert_eq!(e.rect.bottom(), TILE_SIZE);
    assert_eq!(e.rect.w, HAZARD_WIDTH);
}

#[test]
fn goal_is_centred_and_narrower_than_tile() {
    let e = Entity::goal(8, 2);
    assert!(e.rect.w < TILE_SIZE);
    assert_eq!(e.rect.center_x(), 8 * TILE_SIZE + TILE_SIZE / 2);
    assert_eq!(e.rect.bottom(), 3 * TILE_SIZE);
}

#[test]
fn player_spawns_on_cell_floor() {
    let p = Player::spawn(3, 8);
    assert_eq!(p.rect.x, 3 * TILE_SIZE);
    assert_eq!(p.rect.bottom(), 9 * TILE_SIZE);
    assert_eq!(p.activity, Activity::Idle);
    assert!(!p.jumping);
    assert_eq!(p.v_jump, V_JUMP);
    assert_eq!(p.anim, Animation::default());
}

#[test]
fn world_views_filter_by_kind() {
    let world = World::new(vec![
        Entity::ground('-', 0, 1),
        Entity::ground('#', 1, 1),
        Entity::hazard(2, 0),
        Entity::goal(3, 0),
    ]);
    assert_eq!(world.ground().count(), 2);
    assert_eq!(world.hazards().count(), 1);
    assert_eq!(world.goals().count(), 1);

    let corner = Rect::new(0, 60, 10, 10);
    assert!(world.hits_ground(&corner));
    assert!(!world.hits_hazard(&corner));
    assert!(!world.hits_goal(&corner));
}

#[test]
fn activity_direction() {
    assert_eq!(Activity::Idle.direction(), None);
    assert_eq!(Activity::Run(Direction::Left).direction(), Some(Direction::Left));
    assert_eq!(Activity::Jump(None).direction(), None);
    assert_eq!(Activity::Jump(Some(Direction::Right)).direction(), Some(Direction::Right));
}

#[test]
fn game_state_clone_is_independent() {
    let original = GameState {
        level_index: 0,
        level_count: 3,
        world: World::new(vec![Entity::ground('-', 0, 1)]),
        player: Player::spawn(0, 0),
        frame: 0,
    };
    let mut cloned = original.clone();

    cloned.player.rect.x = 99;
    cloned.world.entities.clear();

    assert_eq!(original.player.rect.x, 0);
    assert_eq!(original.world.entities.len(), 1);
}

#[test]
fn last_level_detection() {
    let mut s = GameState {
        level_index: 1,
        level_count: 3,
        world: World::default(),
        player: Player::spawn(0, 0),
        frame: 0,
    };
    assert!(!s.is_last_level());
    s.level_index = 2;
    assert!(s.is_last_level());
}
