use quickcheck::{Arbitrary, Gen};

use crate::{BlockTree, Board, Colour, Grid, COLOUR_LIST, MAX_DEPTH};

impl Arbitrary for Colour {
    fn arbitrary(g: &mut Gen) -> Self {
        *g.choose(&COLOUR_LIST).unwrap()
    }
}

impl Arbitrary for Grid {
    fn arbitrary(g: &mut Gen) -> Self {
        let depth = *g.choose(&[2u8, 3, 4, 5]).unwrap();
        let side = 1usize << depth;
        let mut grid = Grid::filled(side, COLOUR_LIST[0]);
        for row in 0..side {
            for col in 0..side {
                grid.set(row, col, Colour::arbitrary(g));
            }
        }
        grid
    }
}

fn arbitrary_tree(g: &mut Gen, level: u8) -> BlockTree {
    if level < MAX_DEPTH && bool::arbitrary(g) {
        BlockTree::Split(Box::new([
            arbitrary_tree(g, level + 1),
            arbitrary_tree(g, level + 1),
            arbitrary_tree(g, level + 1),
            arbitrary_tree(g, level + 1),
        ]))
    } else {
        BlockTree::Leaf(Colour::arbitrary(g))
    }
}

impl Arbitrary for BlockTree {
    fn arbitrary(g: &mut Gen) -> Self {
        arbitrary_tree(g, 0)
    }
}

impl Arbitrary for Board {
    fn arbitrary(g: &mut Gen) -> Self {
        let tree = BlockTree::arbitrary(g);
        Board::from_tree(&tree, MAX_DEPTH).unwrap()
    }
}
