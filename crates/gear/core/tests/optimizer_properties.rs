use gear_core::optimizer::{CandidatePool, LockedLayout, SlotAllocator};
use gear_core::{
    BuildRequest, ClassRestriction, HeroClass, Item, ItemLevel, OptimizationWarning, SlotKind,
    StatBlock, StatKind, optimize, validate_stats,
};

/// Deterministic stat noise so catalogs are varied but reproducible.
fn noise(seed: u64) -> i32 {
    let mut z = seed.wrapping_add(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^= z >> 31;
    (z % 13) as i32 - 4
}

fn generated_catalog() -> Vec<Item> {
    let classes = ["all", "warrior", "rogue", "wizard", "priest", "monk"];
    let mut catalog = Vec::new();
    let mut seed = 1u64;

    for slot in SlotKind::ALL {
        for n in 0..8u32 {
            let stats = StatBlock::ZERO.map(|_, _| {
                seed += 1;
                noise(seed)
            });
            catalog.push(Item {
                name: format!("{slot} #{n}"),
                slot: slot.to_string(),
                class: classes[(n as usize) % classes.len()].to_string(),
                stats,
                level: Some(ItemLevel::from(1 + n * 12)),
            });
        }
    }

    catalog
}

fn scenarios() -> Vec<BuildRequest> {
    HeroClass::ALL
        .iter()
        .enumerate()
        .map(|(i, &class)| {
            let i = i as i32;
            BuildRequest::new(class, 20 + 15 * i as u32)
                .with_base(StatBlock::new(8 + i, 12 - i, 10, 9 + i, 11))
                .with_desired(StatBlock::new(18, 14 + i, 16, 15, 12 + 2 * i))
                .with_points(3 * i)
        })
        .collect()
}

#[test]
fn slot_capacity_is_never_exceeded() {
    let catalog = generated_catalog();
    for request in scenarios() {
        let result = optimize(&request, &catalog);
        for slot in SlotKind::ALL {
            let worn = result.items.iter().filter(|e| e.slot == slot).count();
            assert!(worn <= slot.capacity(), "{slot}: {worn} items");
        }
    }
}

#[test]
fn equipped_items_respect_class_and_level() {
    let catalog = generated_catalog();
    for request in scenarios() {
        let result = optimize(&request, &catalog);
        for equipped in result.chosen_items() {
            let restriction = equipped.item.class_restriction().unwrap();
            assert!(restriction.allows(request.class), "{}", equipped.name());
            assert!(equipped.item.required_level() <= request.level);
        }
    }
}

#[test]
fn surplus_absorbs_negative_item_stats() {
    let desired = StatBlock::splat(10).with(StatKind::Str, 13);
    let base = StatBlock::splat(10).with(StatKind::Int, 15);
    let catalog = vec![Item::new(
        "Brute Ring",
        SlotKind::Ring,
        ClassRestriction::All,
        StatBlock::new(3, -5, 0, 0, 0),
    )];

    let request = BuildRequest::new(HeroClass::Warrior, 50)
        .with_base(base)
        .with_desired(desired);
    let result = optimize(&request, &catalog);

    assert!(result.success);
    assert!(result.items.iter().any(|e| e.name() == "Brute Ring"));
    assert_eq!(result.final_stats.int, 10);
    assert_eq!(result.missing_stats, StatBlock::ZERO);
}

#[test]
fn refinement_is_monotonic_and_bounded() {
    let catalog = generated_catalog();
    for request in scenarios() {
        let pool = CandidatePool::from_catalog(&catalog, request.class, request.level);
        let mut warnings = Vec::new();
        let layout = LockedLayout::build(
            &request.base,
            &[],
            request.class,
            request.level,
            &mut warnings,
        );

        let allocation = SlotAllocator::new(
            &pool,
            request.desired,
            request.available_points as u32,
            request.class,
            layout.baseline,
            layout.open_slots(),
        )
        .run(10);

        assert!(allocation.passes <= 10);
        assert!(
            allocation.history.windows(2).all(|pair| pair[1] <= pair[0]),
            "{:?}",
            allocation.history
        );
    }
}

#[test]
fn enough_points_always_succeed() {
    let catalog = generated_catalog();
    for request in scenarios() {
        let generous = request.clone().with_points(500);
        let result = optimize(&generous, &catalog);

        assert!(result.success);
        assert_eq!(result.missing_stats, StatBlock::ZERO);
        for stat in StatKind::ALL {
            assert!(result.final_stats[stat] >= generous.desired[stat]);
        }
    }
}

#[test]
fn locked_items_survive_the_search() {
    let catalog = generated_catalog();
    let request = scenarios().remove(0);

    let first = optimize(&request, &catalog);
    let pinned: Vec<Item> = first.items.iter().map(|e| e.item.clone()).collect();
    assert!(!pinned.is_empty());

    let relocked = optimize(&request.clone().with_locked(pinned.clone()), &catalog);
    let locked: Vec<&Item> = relocked.locked_items().map(|e| &e.item).collect();

    assert_eq!(locked.len(), pinned.len());
    for (kept, original) in locked.iter().zip(&pinned) {
        assert_eq!(*kept, original);
    }
    assert!(relocked.items[..pinned.len()].iter().all(|e| e.locked));
}

#[test]
fn locked_items_outside_the_class_are_kept_with_a_warning() {
    let staff = Item::new(
        "Archmage Staff",
        SlotKind::Weapon,
        HeroClass::Wizard,
        StatBlock::new(0, 8, 0, 0, 0),
    )
    .with_level(ItemLevel::master());
    let sword = Item::new(
        "Long Sword",
        SlotKind::Weapon,
        HeroClass::Warrior,
        StatBlock::new(8, 0, 0, 0, 0),
    );

    let request = BuildRequest::new(HeroClass::Warrior, 10)
        .with_base(StatBlock::splat(7))
        .with_desired(StatBlock::splat(7))
        .with_locked(vec![staff.clone()]);
    let result = optimize(&request, &[sword]);

    assert_eq!(result.items.len(), 1);
    assert!(result.items[0].locked);
    assert_eq!(result.items[0].item, staff);
    assert!(result.warnings.iter().any(|w| matches!(
        w,
        OptimizationWarning::LockedItemRestricted { level: 10, .. }
    )));
}

#[test]
fn better_armor_is_equipped_even_without_deficit() {
    let catalog = vec![
        Item::new(
            "Test Armor",
            SlotKind::Armor,
            HeroClass::Warrior,
            StatBlock::new(5, 0, 0, 5, 0),
        )
        .with_level(1),
        Item::new(
            "Weak Armor",
            SlotKind::Armor,
            HeroClass::Warrior,
            StatBlock::new(1, 0, 0, 1, 0),
        )
        .with_level(1),
    ];
    let request = BuildRequest::new(HeroClass::Warrior, 99)
        .with_base(StatBlock::splat(10))
        .with_desired(StatBlock::splat(10));

    let result = optimize(&request, &catalog);
    let armor = result
        .items
        .iter()
        .find(|e| e.slot == SlotKind::Armor)
        .expect("armor equipped");

    assert_eq!(armor.name(), "Test Armor");
    assert!(result.success);
}

#[test]
fn expensive_secondary_deficit_is_covered_first() {
    let catalog = vec![
        Item::new(
            "Str Helm",
            SlotKind::Helm,
            ClassRestriction::All,
            StatBlock::ZERO.with(StatKind::Str, 4),
        ),
        Item::new(
            "Int Helm",
            SlotKind::Helm,
            ClassRestriction::All,
            StatBlock::ZERO.with(StatKind::Int, 4),
        ),
    ];
    let request = BuildRequest::new(HeroClass::Warrior, 99)
        .with_base(StatBlock::splat(10))
        .with_desired(
            StatBlock::splat(10)
                .with(StatKind::Str, 14)
                .with(StatKind::Int, 14),
        )
        .with_points(0);

    let result = optimize(&request, &catalog);
    let names: Vec<_> = result.items.iter().map(|e| e.name()).collect();

    // INT is a secondary stat for a warrior, so its deficit costs more than STR's.
    assert_eq!(names, ["Int Helm"]);
    assert_eq!(result.missing_stats, StatBlock::ZERO.with(StatKind::Str, 4));
    assert!(!result.success);
}

#[test]
fn validate_stats_scenarios() {
    let threes = StatBlock::splat(3);
    assert!(validate_stats(1, &threes, 0));
    assert!(!validate_stats(2, &threes, 0));
}

#[test]
fn unknown_catalog_entries_are_ignored() {
    let catalog = vec![
        Item {
            name: "Mystery Cape".into(),
            slot: "cape".into(),
            class: "all".into(),
            stats: StatBlock::splat(9),
            level: None,
        },
        Item {
            name: "Bard Lute".into(),
            slot: "weapon".into(),
            class: "bard".into(),
            stats: StatBlock::splat(9),
            level: None,
        },
    ];
    let request = BuildRequest::new(HeroClass::Monk, 40)
        .with_base(StatBlock::splat(10))
        .with_desired(StatBlock::splat(12))
        .with_points(10);

    let result = optimize(&request, &catalog);
    assert!(result.items.is_empty());
    assert!(result.success);
    assert_eq!(result.points_allocated, StatBlock::splat(2));
}
