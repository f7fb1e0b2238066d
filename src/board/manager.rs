use crate::board::Board;
use crate::errors::{BoardError, Result};
use log::debug;
/// Linear history of boards with an optional cursor.
///
/// The public API moves the cursor only through `set_current_board`.
/// `add_board` leaves it where it was, and `next_board`/`prev_board` are
/// lookups relative to it.
#[derive(Debug, Clone, Default)]
pub struct BoardManager {
    boards: Vec<Board>,
    current_board: Option<usize>,
}
impl BoardManager {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn add_board(&mut self, board: Board) {
        debug!("board #{} added: {:?}", self.boards.len(), board.pwd());
        self.boards.push(board);
    }
    /// Appends `board` and makes it current. Returns its index.
    pub(crate) fn push_current(&mut self, board: Board) -> usize {
        self.add_board(board);
        let index = self.boards.len() - 1;
        debug!("current board {:?} -> {}", self.current_board, index);
        self.current_board = Some(index);
        index
    }
    pub fn set_current_board(&mut self, index: usize) -> Result<()> {
        self.check_index(index)?;
        debug!("current board {:?} -> {}", self.current_board, index);
        self.current_board = Some(index);
        Ok(())
    }
    pub fn get_board(&self, index: usize) -> Result<&Board> {
        self.boards
            .get(index)
            .ok_or(BoardError::OutOfRange {
                index,
                len: self.boards.len(),
            })
    }
    pub fn get_current_board(&self) -> Result<&Board> {
        let index = self.current_board.ok_or(BoardError::NoCurrentBoard)?;
        self.get_board(index)
    }
    pub fn next_board(&self) -> Result<&Board> {
        if self.boards.is_empty() {
            return Err(BoardError::NoBoards);
        }
        let index = match self.current_board {
            None => 0,
            Some(current) => current + 1,
        };
        if index >= self.boards.len() {
            return Err(BoardError::NoNextBoard);
        }
        self.get_board(index)
    }
    pub fn prev_board(&self) -> Result<&Board> {
        if self.boards.is_empty() {
            return Err(BoardError::NoBoards);
        }
        match self.current_board {
            Some(current) if current >= 1 => self.get_board(current - 1),
            _ => Err(BoardError::NoPreviousBoard),
        }
    }
    pub fn current_index(&self) -> Option<usize> {
        self.current_board
    }
    pub fn has_next(&self) -> bool {
        self.next_board().is_ok()
    }
    pub fn has_prev(&self) -> bool {
        self.prev_board().is_ok()
    }
    pub fn boards(&self) -> &[Board] {
        &self.boards
    }
    pub fn len(&self) -> usize {
        self.boards.len()
    }
    pub fn is_empty(&self) -> bool {
        self.boards.is_empty()
    }
    fn check_index(&self, index: usize) -> Result<()> {
        if index < self.boards.len() {
            Ok(())
        } else {
            Err(BoardError::OutOfRange {
                index,
                len: self.boards.len(),
            })
        }
    }
}
