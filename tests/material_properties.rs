use sandburst_engine::domain::particle::Combustion;
use sandburst_engine::elements::{EL_SAND, EL_WATER};
use sandburst_engine::{Material, Particle, WorldCore};

/// Stone walls on the left, right and bottom edges.
fn stone_box(world: &mut WorldCore) {
    let (w, h) = (world.width(), world.height());
    for x in 0..w {
        world.set_particle(x, h - 1, Some(Particle::Stone));
    }
    for y in 0..h {
        world.set_particle(0, y, Some(Particle::Stone));
        world.set_particle(w - 1, y, Some(Particle::Stone));
    }
}

fn stone_cells(world: &WorldCore) -> Vec<(u32, u32)> {
    world
        .grid()
        .particles()
        .filter(|(_, _, p)| *p == Particle::Stone)
        .map(|(x, y, _)| (x, y))
        .collect()
}

#[test]
fn stone_never_moves() {
    let mut world = WorldCore::with_seed(20, 20, 1);
    world.place(4, 10, Material::Stone);
    world.place(12, 5, Material::Stone);
    world.place(9, 18, Material::Stone);
    for x in 2..18 {
        world.add_particle(x, 0, EL_SAND);
        world.add_particle(x, 1, EL_WATER);
    }
    let before = stone_cells(&world);
    assert_eq!(before.len(), 12);

    for _ in 0..200 {
        world.step();
        assert_eq!(stone_cells(&world), before);
    }
}

#[test]
fn sand_settles_on_stone_floor() {
    let mut world = WorldCore::with_seed(9, 20, 2);
    stone_box(&mut world);
    for y in 0..5 {
        world.add_particle(4, y, EL_SAND);
    }

    for _ in 0..200 {
        world.step();
    }

    let sand: Vec<_> = world.grid().particles().filter(|(_, _, p)| p.is_sand()).collect();
    assert_eq!(sand.len(), 5);
    for (x, y, _) in sand {
        assert!(y >= 16, "sand at ({}, {}) should have reached the floor", x, y);
        assert!(world.particle_at(x as i32, y as i32 + 1).is_some());
    }
}

#[test]
fn water_levels_out_in_a_closed_container() {
    // 10 interior columns, 20 drops: exactly two full rows
    let mut world = WorldCore::with_seed(12, 14, 3);
    stone_box(&mut world);
    for x in 1..11 {
        world.add_particle(x, 0, EL_WATER);
        world.add_particle(x, 1, EL_WATER);
    }

    for _ in 0..500 {
        world.step();
    }
    for x in 1..11 {
        assert!(world.particle_at(x, 12).is_some_and(|p| p.is_water()), "row 12, x={}", x);
        assert!(world.particle_at(x, 11).is_some_and(|p| p.is_water()), "row 11, x={}", x);
    }

    let settled = world.grid().clone();
    for _ in 0..50 {
        world.step();
    }
    assert_eq!(world.grid(), &settled);
}

#[test]
fn explosive_detonates_exactly_when_fuse_runs_out() {
    let mut world = WorldCore::with_seed(20, 20, 4);
    stone_box(&mut world);
    world.set_particle(10, 18, Some(Particle::EXPLOSIVE));
    let fuse_ticks = world.tuning().explosive.fuse_ticks;

    for tick in 1..fuse_ticks {
        world.step();
        assert_eq!(
            world.particle_at(10, 18),
            Some(Particle::Explosive { fuse: Some(fuse_ticks - tick) }),
            "tick {}",
            tick
        );
    }

    world.enable_perf_metrics(true);
    world.step();
    assert_eq!(world.get_perf_stats().detonations(), 1);
    assert!(!world
        .grid()
        .particles()
        .any(|(_, _, p)| matches!(p, Particle::Explosive { .. })));
}

#[test]
fn short_fuse_from_tuning() {
    let mut world = WorldCore::with_seed(10, 10, 5);
    world.load_tuning_json(r#"{"explosive":{"fuse_ticks":3}}"#).unwrap();
    stone_box(&mut world);
    world.set_particle(5, 8, Some(Particle::EXPLOSIVE));
    world.step();
    world.step();
    assert!(matches!(world.particle_at(5, 8), Some(Particle::Explosive { fuse: Some(1) })));
    world.step();
    assert!(!matches!(world.particle_at(5, 8), Some(Particle::Explosive { .. })));
}

#[test]
fn wood_goes_through_every_phase() {
    let mut world = WorldCore::with_seed(12, 12, 6);
    world.set_particle(5, 5, Some(Particle::WOOD));
    // a long-lived flame pinned next to the wood
    world.set_particle(6, 5, Some(Particle::Fire { lifetime: 2000 }));
    world.set_particle(6, 4, Some(Particle::Stone));
    world.set_particle(7, 5, Some(Particle::Stone));

    let mut phases = vec!["unlit"];
    for _ in 0..600 {
        world.step();
        let phase = match world.particle_at(5, 5) {
            Some(Particle::Wood { state: Combustion::Unlit }) => "unlit",
            Some(Particle::Wood { state: Combustion::Exposed { .. } }) => "exposed",
            Some(Particle::Wood { state: Combustion::Burning { .. } }) => "burning",
            _ => "gone",
        };
        if phases.last() != Some(&phase) {
            phases.push(phase);
        }
        if phase == "gone" {
            break;
        }
    }
    assert_eq!(phases, vec!["unlit", "exposed", "burning", "gone"]);
}

fn tally(world: &WorldCore, pred: impl Fn(&Particle) -> bool) -> usize {
    world.grid().particles().filter(|(_, _, p)| pred(p)).count()
}

#[test]
fn sand_and_water_are_conserved_while_mixing() {
    let mut world = WorldCore::with_seed(40, 30, 7);
    stone_box(&mut world);
    // sand poured on top of a pool so it has to sink through
    for x in 1..39 {
        for y in 20..29 {
            world.add_particle(x, y, EL_WATER);
        }
    }
    for x in (4..36).step_by(3) {
        world.place(x, 2, Material::Sand);
    }
    world.place(18, 14, Material::Stone);
    let sand = tally(&world, Particle::is_sand);
    let water = tally(&world, Particle::is_water);
    assert!(sand > 0 && water > 0);

    for tick in 0..300 {
        world.step();
        assert_eq!(tally(&world, Particle::is_sand), sand, "sand count changed on tick {}", tick);
        assert_eq!(tally(&world, Particle::is_water), water, "water count changed on tick {}", tick);
        assert_eq!(world.particle_count(), world.grid().particle_count());
    }

    for material in [Material::Sand, Material::Water, Material::Stone] {
        let rendered = world.types().iter().filter(|&&t| t == material.id()).count();
        let held = tally(&world, |p| p.material() == material);
        assert_eq!(rendered, held, "{:?}", material);
    }

    // sand ends up under the water, not floating on it
    let surface = world
        .grid()
        .particles()
        .filter(|(_, _, p)| p.is_water())
        .map(|(_, y, _)| y)
        .min()
        .unwrap();
    let sand_above_water = world
        .grid()
        .particles()
        .filter(|(_, y, p)| p.is_sand() && *y < surface)
        .count();
    assert!(sand_above_water < sand / 2, "{} of {} sand still above the pool", sand_above_water, sand);
}
