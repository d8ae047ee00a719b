use orbitbox_engine::constants::BIG_G;
use orbitbox_engine::forces::attraction_force;
use orbitbox_engine::{CircleBody, EngineCore, EngineSettings, Item, Vector};

fn ball(x: f32, y: f32, vx: f32, vy: f32, mass: f32, radius: f32) -> CircleBody {
    CircleBody::new(Vector::new(x, y), Vector::new(vx, vy), mass, radius, "black")
}

fn momentum(engine: &EngineCore) -> Vector {
    engine
        .get_items()
        .fold(Vector::zero(), |acc, item| acc + item.velocity() * item.mass())
}

fn kinetic_energy(engine: &EngineCore) -> f32 {
    engine
        .get_items()
        .map(|item| 0.5 * item.mass() * item.velocity().length_squared())
        .sum()
}

fn free_space() -> EngineCore {
    EngineCore::with_settings(EngineSettings {
        gravity: false,
        attraction: false,
        ..EngineSettings::default()
    })
    .expect("default settings are valid")
}

#[test]
fn oblique_collision_conserves_momentum_and_energy() {
    let mut engine = free_space();
    engine.add_item(ball(100.0, 100.0, 4.0, -1.0, 3.0, 2.0)).unwrap();
    engine.add_item(ball(103.0, 102.0, -2.0, -0.5, 8.0, 2.0)).unwrap();

    let p0 = momentum(&engine);
    let e0 = kinetic_energy(&engine);

    engine.process_all_collisions();

    let p1 = momentum(&engine);
    let e1 = kinetic_energy(&engine);
    assert!((p0.x - p1.x).abs() < 1e-4, "{:?} vs {:?}", p0, p1);
    assert!((p0.y - p1.y).abs() < 1e-4, "{:?} vs {:?}", p0, p1);
    assert!((e0 - e1).abs() / e0 < 1e-5, "{} vs {}", e0, e1);
    assert!(engine.collision_flag(0) && engine.collision_flag(1));
}

#[test]
fn touching_equal_balls_swap_velocities() {
    let mut engine = free_space();
    let a = engine.add_item(ball(150.0, 100.0, 20.0, 0.0, 5.0, 5.0)).unwrap();
    let b = engine.add_item(ball(160.0, 100.0, -20.0, 0.0, 5.0, 5.0)).unwrap();

    engine.process_all_collisions();

    assert_eq!(engine.get_item(a).unwrap().velocity(), Vector::new(-20.0, 0.0));
    assert_eq!(engine.get_item(b).unwrap().velocity(), Vector::new(20.0, 0.0));
}

#[test]
fn floor_reflection_is_not_repeated() {
    let mut engine = free_space();
    let i = engine.add_item(ball(250.0, 0.0, 1.5, -5.0, 1.0, 1.0)).unwrap();

    engine.process_all_collisions();
    engine.process_all_collisions();

    assert_eq!(engine.get_item(i).unwrap().velocity(), Vector::new(1.5, 5.0));
}

#[test]
fn removed_slot_is_reused_and_others_untouched() {
    let mut engine = EngineCore::new();
    let a = engine.add_item(ball(10.0, 10.0, 0.0, 0.0, 1.0, 1.0)).unwrap();
    let b = engine.add_item(ball(20.0, 20.0, 1.0, 2.0, 2.0, 3.0)).unwrap();
    let b_before: Item = engine.get_item(b).unwrap().clone();

    engine.remove_item(a).unwrap();
    let c = engine.add_item(ball(30.0, 30.0, 0.0, 0.0, 4.0, 1.0)).unwrap();

    assert_eq!(c, a);
    assert_eq!(engine.get_item(b).unwrap(), &b_before);
    assert_eq!(engine.get_item(c).unwrap().mass(), 4.0);
    assert!(engine.remove_item(a).is_ok());
    assert!(engine.remove_item(a).is_err());
}

#[test]
fn attraction_obeys_third_law() {
    let a: Item = ball(100.0, 100.0, 0.0, 0.0, 1e13, 1.0).into();
    let b: Item = ball(130.0, 140.0, 0.0, 0.0, 1e13, 1.0).into();
    let slots = vec![Some(a.clone()), Some(b.clone())];

    let fa = attraction_force(0, &a, &slots);
    let fb = attraction_force(1, &b, &slots);

    let expected = BIG_G * 1e13 * 1e13 / (50.0 * 50.0);
    assert!((fa.length() - expected).abs() / expected < 1e-5);
    assert!((fa.x + fb.x).abs() / expected < 1e-5);
    assert!((fa.y + fb.y).abs() / expected < 1e-5);
    // A is pulled toward B
    assert!(fa.x > 0.0 && fa.y > 0.0);
}

#[test]
fn single_tick_scenario_matches_hand_calculation() {
    let mut engine = EngineCore::with_settings(EngineSettings {
        timestep: 0.1967,
        gravity: true,
        attraction: false,
        box_width: 500.0,
        box_height: 200.0,
    })
    .unwrap();
    let i = engine.add_item(ball(6.0, 6.0, 2.0, 3.0, 5.0, 2.0)).unwrap();

    engine.step();

    let item = engine.get_item(i).unwrap();
    assert!((item.position().x - 6.393).abs() < 1e-3);
    assert!((item.position().y - 6.590).abs() < 1e-3);
    assert!((item.velocity().y - (3.0 - 0.1967)).abs() < 1e-5);
}

#[test]
fn bouncing_ball_stays_in_the_box() {
    let mut engine = EngineCore::new();
    let i = engine.add_item(ball(250.0, 100.0, 37.0, -11.0, 5.0, 2.0)).unwrap();

    for _ in 0..1_000 {
        engine.step();
    }

    let p = engine.get_item(i).unwrap().position();
    // One tick of travel is the most a body can overshoot a wall
    let slack = 40.0 * engine.timestep() + 2.0;
    assert!(p.x > -slack && p.x < engine.box_width() + slack, "x = {}", p.x);
    assert!(p.y > -slack && p.y < engine.box_height() + slack, "y = {}", p.y);
}
