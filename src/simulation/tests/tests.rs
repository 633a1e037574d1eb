use super::*;
use crate::domain::elements::{rgb_to_abgr, EL_EMPTY, EL_SAND, EL_STONE};

fn stone_floor(world: &mut WorldCore) {
    let y = world.height() - 1;
    for x in 0..world.width() {
        world.set_particle(x, y, Some(Particle::Stone));
    }
}

#[test]
fn scan_order_stays_a_permutation() {
    let mut world = WorldCore::with_seed(7, 5, 1);
    for _ in 0..3 {
        world.step();
    }
    let mut order = world.scan_order.clone();
    order.sort_unstable();
    assert_eq!(order, (0..35).collect::<Vec<u32>>());
}

#[test]
fn place_uses_footprints_and_clips() {
    let mut world = WorldCore::with_seed(10, 10, 3);
    assert_eq!(world.place(0, 0, Material::Stone), 4);
    assert_eq!(world.place(8, 8, Material::Wood), 4);
    assert_eq!(world.place(0, 0, Material::Sand), 0);
    assert_eq!(world.place(5, 5, Material::Sand), 1);
    assert_eq!(world.place(10, 0, Material::Sand), 0);
    assert_eq!(world.particle_count(), 9);
    assert_eq!(world.particle_at(1, 1), Some(Particle::Stone));
    assert_eq!(world.particle_at(9, 9), Some(Particle::WOOD));
}

#[test]
fn out_of_bounds_commands_are_noops() {
    let mut world = WorldCore::with_seed(8, 8, 5);
    assert!(!world.add_particle(8, 0, EL_SAND));
    assert!(!world.add_particle(0, 0, EL_EMPTY));
    assert!(!world.add_particle(0, 0, 99));
    assert!(!world.remove_particle(0, 0));
    assert!(!world.detonate(-1, 3));
    assert!(!world.detonate_with_radius(3, 8, 4));
    assert_eq!(world.push(100, 100, 5, 3.0), 0);
    assert_eq!(world.particle_count(), 0);
}

#[test]
fn render_feed_follows_mutations() {
    let mut world = WorldCore::with_seed(6, 6, 2);
    let idx = world.grid().index(2, 3);
    world.add_particle(2, 3, EL_SAND);
    assert_eq!(world.types()[idx], EL_SAND);
    assert_eq!(world.colors()[idx], rgb_to_abgr(Material::Sand.base_rgb()));

    world.set_particle(2, 3, Some(Particle::Explosive { fuse: Some(42) }));
    assert_eq!(world.states()[idx], 42);

    world.remove_particle(2, 3);
    assert_eq!(world.types()[idx], EL_EMPTY);
    assert_eq!(world.states()[idx], 0);
}

#[test]
fn rules_conserve_sand_on_a_floor() {
    let mut world = WorldCore::with_seed(16, 16, 11);
    stone_floor(&mut world);
    for x in 3..12 {
        for y in 0..4 {
            world.add_particle(x, y, EL_SAND);
        }
    }
    let before = world.particle_count();
    for _ in 0..150 {
        world.step();
        assert_eq!(world.particle_count(), before);
    }
    for (x, y, p) in world.grid().particles() {
        if p.is_sand() {
            assert!(world.particle_at(x as i32, y as i32 + 1).is_some(), "sand floating at ({}, {})", x, y);
        }
    }
}

#[test]
fn perf_stats_only_when_enabled() {
    let mut world = WorldCore::with_seed(12, 12, 4);
    stone_floor(&mut world);
    world.step();
    assert_eq!(world.get_perf_stats().particles_processed(), 0);

    world.enable_perf_metrics(true);
    world.step();
    let stats = world.get_perf_stats();
    assert_eq!(stats.particles_processed(), 12);
    assert_eq!(stats.particle_count(), 12);
    assert_eq!(stats.grid_size(), 144);
    assert!(stats.memory_bytes() > 0);

    world.enable_perf_metrics(false);
    assert_eq!(world.get_perf_stats().grid_size(), 0);
}

#[test]
fn bad_tuning_leaves_current_values() {
    let mut world = WorldCore::with_seed(4, 4, 1);
    assert!(world.load_tuning_json(r#"{"sand":{"sink_chance":2.0}}"#).is_err());
    assert!(world.load_tuning_json("not json").is_err());
    assert_eq!(world.tuning(), &Tuning::default());

    world.load_tuning_json(r#"{"explosive":{"fuse_ticks":5}}"#).unwrap();
    assert_eq!(world.tuning().explosive.fuse_ticks, 5);
    assert_eq!(world.tuning().sand, Tuning::default().sand);
    assert!(world.tuning_json().contains("\"fuse_ticks\":5"));
}

#[test]
fn external_blast_shortens_nearby_fuses() {
    let mut world = WorldCore::with_seed(30, 30, 6);
    world.set_particle(17, 15, Some(Particle::Explosive { fuse: Some(100) }));
    world.set_particle(15, 28, Some(Particle::Explosive { fuse: Some(100) }));
    assert!(world.detonate(15, 15));
    let chain = world.tuning().explosion.chain_fuse;
    assert_eq!(world.particle_at(17, 15), Some(Particle::Explosive { fuse: Some(chain) }));
    assert_eq!(world.particle_at(15, 28), Some(Particle::Explosive { fuse: Some(100) }));
    assert_eq!(world.particle_count(), world.grid().particle_count());
}

#[test]
fn mid_tick_blast_keeps_one_particle_per_cell() {
    let mut world = WorldCore::with_seed(40, 30, 21);
    stone_floor(&mut world);
    for x in 10..30 {
        for y in 20..29 {
            world.add_particle(x, y, EL_SAND);
        }
    }
    world.set_particle(20, 19, Some(Particle::Explosive { fuse: Some(1) }));
    let sand_before = world.grid().particles().filter(|(_, _, p)| p.is_sand()).count();

    world.enable_perf_metrics(true);
    world.step();

    let stats = world.get_perf_stats();
    assert_eq!(stats.detonations(), 1);
    assert!(world.grid().particles().all(|(_, _, p)| !matches!(p, Particle::Explosive { .. })));

    let sand_after = world.grid().particles().filter(|(_, _, p)| p.is_sand()).count();
    assert!(sand_after <= sand_before);
    assert!(sand_after > 0);
    assert_eq!(world.particle_count(), world.grid().particle_count());
    for y in 0..world.height() {
        for x in 0..world.width() {
            let idx = world.grid().index(x, y);
            let expected = world.particle_at(x as i32, y as i32).map_or(EL_EMPTY, |p| p.material().id());
            assert_eq!(world.types()[idx], expected);
        }
    }
}

#[test]
fn clear_resets_state() {
    let mut world = WorldCore::with_seed(8, 8, 9);
    world.place(0, 0, Material::Stone);
    world.step();
    world.clear();
    assert_eq!(world.particle_count(), 0);
    assert_eq!(world.frame(), 0);
    assert!(world.types().iter().all(|&t| t == EL_EMPTY));
    assert_eq!(world.types().iter().filter(|&&t| t == EL_STONE).count(), 0);
}

#[test]
fn push_gesture_sets_flight() {
    let mut world = WorldCore::with_seed(30, 30, 13);
    world.add_particle(15, 12, EL_SAND);
    world.set_particle(15, 18, Some(Particle::Stone));
    assert_eq!(world.push_default(15, 15), 1);
    let v = world.particle_at(15, 12).and_then(|p| p.motion()).unwrap();
    assert!(v.vy < 0.0);
    assert_eq!(world.particle_at(15, 18), Some(Particle::Stone));
}

#[test]
fn blasted_water_against_a_wall_lands_back_home() {
    let mut world = WorldCore::with_seed(30, 20, 17);
    for y in 0..20 {
        for x in 2..10 {
            world.set_particle(x, y, Some(Particle::Stone));
        }
    }
    world.set_particle(10, 10, Some(Particle::WATER));
    world
        .load_tuning_json(r#"{"explosion":{"water_evaporation_chance":0.0}}"#)
        .unwrap();

    assert!(world.detonate_with_radius(12, 10, 8));
    let water: Vec<_> = world.grid().particles().filter(|(_, _, p)| p.is_water()).collect();
    assert_eq!(water.len(), 1);
    assert_eq!((water[0].0, water[0].1), (10, 10));
}

#[test]
fn oversized_blast_force_is_rejected() {
    let mut world = WorldCore::with_seed(40, 40, 3);
    assert!(world.load_tuning_json(r#"{"explosion":{"blast_force":1e12}}"#).is_err());
    assert!(world.load_tuning_json(r#"{"explosion":{"scatter_scale":1e9}}"#).is_err());
    assert_eq!(world.tuning(), &Tuning::default());

    world.add_particle(21, 20, EL_SAND);
    assert!(world.detonate(20, 20));
    assert_eq!(world.particle_count(), world.grid().particle_count());
}

#[test]
fn huge_radii_are_clamped_to_the_grid() {
    let mut world = WorldCore::with_seed(20, 15, 8);
    for x in 0..20 {
        world.add_particle(x, 14, EL_SAND);
    }
    world.add_particle(0, 0, EL_SAND);
    world.add_particle(19, 0, EL_SAND);

    assert_eq!(world.remove_particles_in_radius(10, 7, i32::MAX), 22);
    assert_eq!(world.particle_count(), 0);
    assert_eq!(world.remove_particles_in_radius(10, 7, -4), 0);

    world.add_particle(0, 14, EL_SAND);
    world.set_particle(19, 0, Some(Particle::Stone));
    assert!(world.detonate_with_radius(10, 7, u32::MAX));
    assert_eq!(world.particle_count(), world.grid().particle_count());

    world.clear();
    world.add_particle(0, 0, EL_SAND);
    world.add_particle(19, 14, EL_SAND);
    assert_eq!(world.push(10, 7, u32::MAX, 2.0), 2);
}
