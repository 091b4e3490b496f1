use drape::{Bounds, Cloth, ClothConfig, DragState, Vec2};

fn cloth_with_square_tiles() -> Cloth {
    let config = ClothConfig::new().with_grid(5, 5).with_tile_size(30.0, 30.0);
    Cloth::with_origin(config, Bounds::new(800.0, 800.0).unwrap(), Vec2::new(100.0, 100.0)).unwrap()
}

#[test]
fn drag_round_trip() {
    let mut cloth = cloth_with_square_tiles();
    let target = cloth.index(3, 2);
    let start = cloth.particle(target).pos;

    cloth.on_pointer_down(start.x + 3.0, start.y + 4.0);
    cloth.on_pointer_move(250.0, 300.0);
    cloth.step();

    let p = cloth.particle(target);
    assert_eq!(p.drag_offset, Vec2::new(3.0, 4.0));
    assert_eq!(p.pos, Vec2::new(247.0, 296.0));
    assert_eq!(p.mass, 0.0);
    assert!(p.dragged);
    assert_eq!(cloth.drag_targets(), &[target]);
    assert!(cloth.is_dragging());

    cloth.on_pointer_up();
    cloth.step();

    let p = cloth.particle(target);
    assert_eq!(p.mass, 1.0);
    assert!(!p.dragged);
    assert!(cloth.drag_targets().is_empty());
    assert!(!cloth.is_dragging());
}

#[test]
fn second_press_carries_held_particles_first() {
    let mut cloth = cloth_with_square_tiles();
    let target = cloth.index(3, 2);
    let start = cloth.particle(target).pos;

    cloth.on_pointer_down(start.x + 3.0, start.y + 4.0);
    cloth.step();
    cloth.on_pointer_down(start.x + 8.0, start.y + 9.0);
    cloth.step();

    let p = cloth.particle(target);
    assert_eq!(p.drag_offset, Vec2::new(3.0, 4.0));
    assert_eq!(p.pos, Vec2::new(start.x + 5.0, start.y + 5.0));
    assert_eq!(p.prev_pos, p.pos);
    assert_eq!(cloth.drag_targets(), &[target]);
}

#[test]
fn dragged_particle_is_skipped_by_integration() {
    let mut cloth = cloth_with_square_tiles();
    let target = cloth.index(4, 4);
    let at = cloth.particle(target).pos;

    cloth.on_pointer_down(at.x, at.y);
    for _ in 0..10 {
        cloth.step();
    }

    // No pointer motion: the held particle must not drift, even under gravity.
    assert_eq!(cloth.particle(target).pos, at);
    assert_eq!(cloth.particle(target).prev_pos, at);
}

#[test]
fn moving_zeroes_implicit_velocity() {
    let mut cloth = cloth_with_square_tiles();
    let target = cloth.index(2, 2);
    let at = cloth.particle(target).pos;

    cloth.on_pointer_down(at.x, at.y);
    cloth.on_pointer_move(at.x + 40.0, at.y + 10.0);
    cloth.step();

    let p = cloth.particle(target);
    assert_eq!(p.velocity_raw(), Vec2::zero());
}

#[test]
fn one_press_can_capture_several_particles() {
    // Default tiles are 30x15, so a press halfway between two vertical
    // neighbours reaches both with the 17px pickup radius.
    let mut cloth: Cloth = Cloth::new(ClothConfig::new().with_grid(4, 4), Bounds::new(800.0, 800.0).unwrap()).unwrap();
    let upper = cloth.particle(cloth.index(1, 1)).pos;

    cloth.on_pointer_down(upper.x, upper.y + 7.5);
    cloth.step();

    let mut held = cloth.drag_targets().to_vec();
    held.sort_unstable();
    assert_eq!(held, vec![cloth.index(1, 1), cloth.index(2, 1)]);
}

#[test]
fn pinned_row_cannot_be_grabbed() {
    let mut cloth = cloth_with_square_tiles();
    let pinned = cloth.particle(cloth.index(0, 1)).pos;

    cloth.on_pointer_down(pinned.x, pinned.y);
    cloth.step();

    assert!(cloth.drag_targets().is_empty());
    assert!(!cloth.is_dragging());
    assert_eq!(cloth.particle(cloth.index(0, 1)).mass, 0.0);
}

#[test]
fn pointer_indicator_follows_pointer() {
    let mut cloth = cloth_with_square_tiles();
    let at = cloth.particle(cloth.index(1, 1)).pos;

    cloth.on_pointer_move(5.0, 6.0);
    cloth.step();
    let indicator = cloth.pointer();
    assert_eq!(indicator.position, Vec2::new(5.0, 6.0));
    assert_eq!(indicator.radius, 17.0);
    assert!(!indicator.active);

    cloth.on_pointer_down(at.x, at.y);
    cloth.step();
    assert!(cloth.pointer().active);
}

#[test]
fn controller_states() {
    use drape::{DragController, Particle};

    let mut particles = vec![Particle::new(Vec2::new(0.0, 0.0)), Particle::new(Vec2::new(50.0, 0.0))];
    let mut drag = DragController::new(17.0);
    assert_eq!(drag.state(), DragState::Idle);

    drag.pointer_down(Vec2::new(1.0, 1.0), &mut particles);
    assert_eq!(drag.state(), DragState::Dragging);

    drag.pointer_move(Vec2::new(11.0, 21.0), &mut particles);
    assert_eq!(particles[0].pos, Vec2::new(10.0, 20.0));
    assert_eq!(particles[1].pos, Vec2::new(50.0, 0.0));

    assert_eq!(drag.pointer_up(&mut particles), 1);
    assert_eq!(drag.state(), DragState::Idle);
    assert_eq!(particles[0].mass, 1.0);
}
