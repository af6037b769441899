use super::pos;
use board::board::Board;
use board::domain::constants::DEFAULT_SPAWN_ATTEMPTS;
use board::domain::core_types::{Occupant, SpawnZone};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// 佔滿整個預設生成區（x 6..=8, y 0..=4）
fn fill_spawn_zone(board: &mut Board) {
    let mut id = 1;
    for x in 6..=8 {
        for y in 0..=4 {
            let mut blocker = Occupant::object(id, pos(x, y));
            board.add(&mut blocker).expect("add 應成功");
            id += 1;
        }
    }
}

#[test]
fn test_default_spawn_zone() {
    let zone = Board::new().spawn_zone();
    assert_eq!(zone, SpawnZone { x: (6, 8), y: (0, 4) });
    assert_eq!(zone.area(), 15);
    assert!(zone.is_within_board());
}

#[test]
fn test_full_spawn_zone_exhausts_exact_attempts() {
    let mut board = Board::new();
    fill_spawn_zone(&mut board);
    let zone = board.spawn_zone();
    let mut rng = StdRng::seed_from_u64(1);

    for max_attempts in [0, 1, 7, DEFAULT_SPAWN_ATTEMPTS] {
        let mut draws = 0;
        let found = board.find_spawn_location_with(max_attempts, || {
            draws += 1;
            zone.sample(&mut rng).expect("預設生成區應可取樣")
        });

        assert_eq!(found, None, "生成區已滿應回傳哨兵");
        assert_eq!(draws, max_attempts, "應剛好抽 {max_attempts} 次");
    }
}

#[test]
fn test_full_spawn_zone_with_rng_returns_none() {
    let mut board = Board::new();
    fill_spawn_zone(&mut board);
    let mut rng = StdRng::seed_from_u64(42);

    assert_eq!(
        board.find_spawn_location(&mut rng, DEFAULT_SPAWN_ATTEMPTS),
        None
    );
}

#[test]
fn test_spawn_location_is_inside_zone_and_free() {
    let mut board = Board::new();
    let mut rng = StdRng::seed_from_u64(7);

    for id in 1..=10 {
        let spawn = board
            .find_spawn_location(&mut rng, DEFAULT_SPAWN_ATTEMPTS)
            .expect("生成區仍有空位");
        assert!(board.spawn_zone().contains(spawn), "{spawn:?} 應在生成區內");
        assert!(board.can_occupy(spawn), "{spawn:?} 應為空格");

        let mut enemy = Occupant::unit(id, spawn, 1);
        board.add(&mut enemy).expect("add 應成功");
    }
}

#[test]
fn test_spawn_accepts_first_free_draw() {
    let mut board = Board::new();
    let mut blocker = Occupant::object(1, pos(6, 0));
    board.add(&mut blocker).expect("add 應成功");

    let mut script = vec![pos(6, 0), pos(6, 0), pos(7, 1), pos(8, 2)].into_iter();
    let mut draws = 0;
    let found = board.find_spawn_location_with(DEFAULT_SPAWN_ATTEMPTS, || {
        draws += 1;
        script.next().unwrap_or(pos(6, 0))
    });

    assert_eq!(found, Some(pos(7, 1)));
    assert_eq!(draws, 3, "找到空格後應立即停止");
}

#[test]
fn test_spawn_is_deterministic_for_seed() {
    let board = Board::new();
    let first = board.find_spawn_location(&mut StdRng::seed_from_u64(99), 10);
    let second = board.find_spawn_location(&mut StdRng::seed_from_u64(99), 10);
    assert_eq!(first, second);
}

#[test]
fn test_custom_spawn_zone() {
    let zone = SpawnZone { x: (0, 0), y: (2, 2) };
    let board = Board::with_spawn_zone(zone);
    let mut rng = StdRng::seed_from_u64(3);

    assert_eq!(board.find_spawn_location(&mut rng, 1), Some(pos(0, 2)));
}

#[test]
fn test_invalid_spawn_zone_does_not_panic() {
    let reversed = SpawnZone { x: (8, 6), y: (0, 4) };
    let mut rng = StdRng::seed_from_u64(5);

    assert!(!reversed.is_within_board());
    assert_eq!(reversed.sample(&mut rng), None, "反向範圍不應取樣");
    assert_eq!(reversed.area(), 0);

    let board = Board::with_spawn_zone(reversed);
    assert_eq!(
        board.find_spawn_location(&mut rng, DEFAULT_SPAWN_ATTEMPTS),
        None
    );
}

#[test]
fn test_spawn_zone_area_with_extreme_bounds() {
    let huge = SpawnZone {
        x: (i32::MIN, i32::MAX),
        y: (0, 0),
    };
    assert_eq!(huge.area(), 1u64 << 32);

    let whole_plane = SpawnZone {
        x: (i32::MIN, i32::MAX),
        y: (i32::MIN, i32::MAX),
    };
    assert_eq!(whole_plane.area(), u64::MAX, "面積應飽和而非溢位");

    let extreme_reversed = SpawnZone {
        x: (i32::MAX, i32::MIN),
        y: (i32::MAX, i32::MIN),
    };
    assert_eq!(extreme_reversed.area(), 0);
    assert_eq!(extreme_reversed.sample(&mut StdRng::seed_from_u64(1)), None);
}
