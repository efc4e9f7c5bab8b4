//! End-to-end use of the facade: a board in a buffer, its occupancy in bits,
//! loaded from a text file.
#![cfg(feature = "std")]

use std::io::Write;

use prim::prelude::*;
use prim::{fs, text::SuperString as Text};

const BOARD: &str = "\
# rank 1 and rank 8
1 0 0 0 1 0 0 1
0 0 0 0 0 0 0 0
0 0 0 0 0 0 0 0
0 0 0 0 0 0 0 0
0 0 0 0 0 0 0 0
0 0 0 0 0 0 0 0
0 0 0 0 0 0 0 0
1 0 0 0 1 0 0 1
";

fn load_board(path: &std::path::Path) -> Result<Buffer2<bool, 8, 8>> {
    let mut board = Buffer2::<bool, 8, 8>::new();
    let rows = fs::read_lines(path)?
        .into_iter()
        .filter(|line| !Text::new(line.as_str()).starts_with("#"));

    for (rank, line) in rows.enumerate() {
        let row = board.get_mut(rank)?;
        for (file, cell) in Text::new(line).split(" ").iter().enumerate() {
            *row.get_mut(file)? = from_string::<bool>(cell)?;
        }
    }
    Ok(board)
}

fn occupancy(board: &Buffer2<bool, 8, 8>) -> u64 {
    let mut bits = 0u64;
    for (rank, row) in board.iter().enumerate() {
        for (file, &occupied) in row.iter().enumerate() {
            if occupied {
                bitops::set((rank * 8 + file) as u32, &mut bits);
            }
        }
    }
    bits
}

#[test]
fn test_board_from_file_to_bits() -> Result<()> {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(BOARD.as_bytes()).unwrap();

    let board = load_board(file.path())?;
    assert!(board[0][0] && board[7][7]);
    assert!(!board[3][3]);

    let bits = occupancy(&board);
    const CORNERS_AND_KINGS: u64 = mask!(u64; 0, 4, 7, 56, 60, 63);
    assert_eq!(bits, CORNERS_AND_KINGS);
    assert_eq!(bitops::count(bits), 6);
    assert_eq!(bitops::lsb(bits), Some(0));
    assert_eq!(bitops::msb(bits), Some(63));
    assert_eq!(bitops::get_1bits(bits), [0, 4, 7, 56, 60, 63]);
    Ok(())
}

#[test]
fn test_zeroed_board_has_no_bits() -> Result<()> {
    let mut board = Buffer2::<bool, 8, 8>::from_array([BoundedBuffer::from_array([true; 8]); 8]);
    assert_eq!(bitops::count(occupancy(&board)), 64);

    board.zero();
    assert_eq!(occupancy(&board), 0);
    assert!(!*board.get(7)?.get(7)?);
    Ok(())
}

#[test]
fn test_errors_share_one_type() {
    let errors: [Error; 4] = [
        BoundedBuffer::<u8, 2>::new().get(2).unwrap_err(),
        bitops::get_bit::<u8>(9).unwrap_err(),
        from_string::<u16>("-3").unwrap_err(),
        fs::fsize("definitely/not/here").unwrap_err(),
    ];
    let categories: Vec<ErrorCategory> = errors.iter().map(|e| e.category).collect();
    assert_eq!(
        categories,
        [ErrorCategory::Bounds, ErrorCategory::Bounds, ErrorCategory::Parse, ErrorCategory::Io]
    );
}

#[test]
fn test_type_predicates_through_facade() {
    assert!(is_uint64::<u64>());
    assert!(!is_int64::<u64>());
    assert_eq!(kind_of::<f32>(), TypeKind::F32);
}
