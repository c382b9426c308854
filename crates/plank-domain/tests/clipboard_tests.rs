use plank_domain::*;

/// Build a tree holding one root board with a chain of `depth` nested
/// boards, each hanging off a single task of the board above it.
fn tree_with_chain(depth: usize) -> (BoardTree, BoardId, Vec<BoardId>) {
    let mut tree = BoardTree::new();
    let board = tree.new_board("Root");
    let root_id = board.id;
    tree.add_root(board);

    let mut nested = Vec::new();
    let mut current = root_id;
    for level in 0..depth {
        tree.create_task(current, 0, 0, format!("level {level}"), String::new())
            .unwrap();
        let child = tree
            .create_child_board(current, 0, 0, format!("Sub {level}"))
            .unwrap();
        nested.push(child);
        current = child;
    }
    (tree, root_id, nested)
}

fn all_board_ids(tree: &BoardTree) -> Vec<BoardId> {
    let mut ids: Vec<BoardId> = tree.root_boards.iter().map(|b| b.id).collect();
    ids.extend(tree.child_boards.keys().copied());
    ids
}

fn all_task_ids(tree: &BoardTree) -> Vec<TaskId> {
    let mut ids = Vec::new();
    for board in tree
        .root_boards
        .iter()
        .chain(tree.child_boards.values())
    {
        for column in &board.columns {
            ids.extend(column.tasks.iter().map(|t| t.task.id));
        }
    }
    ids
}

fn assert_unique<T: Ord + Copy + std::fmt::Debug>(ids: &[T]) {
    let mut sorted = ids.to_vec();
    sorted.sort_unstable();
    let before = sorted.len();
    sorted.dedup();
    assert_eq!(before, sorted.len(), "duplicate ids in {ids:?}");
}

#[test]
fn cut_paste_round_trip_rebuilds_the_subtree() {
    let (mut tree, root_id, nested) = tree_with_chain(1);
    let child_id = nested[0];

    tree.cut_root_board(root_id).unwrap();
    assert!(tree.root_boards.is_empty());
    assert!(tree.child_boards.is_empty());
    assert_eq!(tree.board_buffer.descendants().len(), 1);
    assert_eq!(tree.board_buffer.descendants()[0].id, child_id);

    let new_root_id = tree.paste_root_board().unwrap();
    assert_ne!(new_root_id, root_id);

    let new_root = tree.get_board(new_root_id).unwrap();
    assert_eq!(new_root.title, "Root");
    assert_eq!(new_root.columns.len(), 3);
    assert_eq!(new_root.columns[0].tasks.len(), 1);
    assert_eq!(new_root.children.len(), 1);

    let new_child_id = new_root.children[0];
    assert_ne!(new_child_id, child_id);
    let task = &new_root.columns[0].tasks[0];
    assert_eq!(task.child_board, Some(new_child_id));

    let new_child = tree.get_board(new_child_id).unwrap();
    assert_eq!(new_child.title, "Sub 0");
    assert_eq!(new_child.parent_task, Some(task.task.id));

    // the buffer still holds the original pair for a second paste
    assert!(!tree.board_buffer.is_empty());
    let second_root_id = tree.paste_root_board().unwrap();
    assert_ne!(second_root_id, new_root_id);
    assert_unique(&all_board_ids(&tree));
    assert_unique(&all_task_ids(&tree));
}

#[test]
fn cut_migrates_every_descendant() {
    let (mut tree, root_id, nested) = tree_with_chain(3);
    assert_eq!(tree.child_boards.len(), 3);

    tree.cut_root_board(root_id).unwrap();

    assert!(tree.child_boards.is_empty());
    let mut pooled: Vec<BoardId> = tree
        .board_buffer
        .descendants()
        .iter()
        .map(|b| b.id)
        .collect();
    pooled.sort_unstable();
    let mut expected = nested.clone();
    expected.sort_unstable();
    assert_eq!(pooled, expected);
}

#[test]
fn ids_stay_unique_across_cut_paste_cycles() {
    let (mut tree, root_id, _) = tree_with_chain(2);
    let max_board_id = tree.board_id_counter;

    tree.cut_root_board(root_id).unwrap();
    tree.paste_root_board().unwrap();
    tree.paste_root_board().unwrap();

    let ids = all_board_ids(&tree);
    assert_unique(&ids);
    assert_unique(&all_task_ids(&tree));
    assert!(ids.iter().all(|&id| id > max_board_id));
}

#[test]
fn cut_column_detaches_and_paste_relinks() {
    let (mut tree, root_id, nested) = tree_with_chain(1);
    let child_id = nested[0];

    tree.cut_column(root_id, 0).unwrap();

    let root = tree.get_board(root_id).unwrap();
    assert_eq!(root.columns.len(), 2);
    assert!(root.children.is_empty());
    assert!(tree.child_boards.is_empty());
    assert_eq!(tree.column_buffer.descendants().len(), 1);
    assert_eq!(tree.column_buffer.descendants()[0].id, child_id);
    // the cut task keeps pointing at its board so paste can relink it
    assert_eq!(
        tree.column_buffer.item().unwrap().tasks[0].child_board,
        Some(child_id)
    );

    // paste into a different board entirely
    let other = tree.new_board("Other");
    let other_id = other.id;
    tree.add_root(other);
    assert!(tree.paste_column(other_id, 1).unwrap());

    let other = tree.get_board(other_id).unwrap();
    assert_eq!(other.columns.len(), 4);
    assert_eq!(other.columns[1].title, "TODO");
    assert_eq!(other.children.len(), 1);
    let new_child_id = other.children[0];
    assert_ne!(new_child_id, child_id);
    assert_eq!(
        other.columns[1].tasks[0].child_board,
        Some(new_child_id)
    );
    assert!(tree.child_boards.contains_key(&new_child_id));
}

#[test]
fn paste_column_with_empty_buffer_is_noop() {
    let (mut tree, root_id, _) = tree_with_chain(0);
    assert!(!tree.paste_column(root_id, 0).unwrap());
    assert_eq!(tree.get_board(root_id).unwrap().columns.len(), 3);
}

#[test]
fn cut_task_buffers_subtree_and_reindexes() {
    let (mut tree, root_id, nested) = tree_with_chain(1);
    let child_id = nested[0];
    // a second task in front of the one holding the board
    tree.create_task(root_id, 0, 0, "keep".to_string(), String::new())
        .unwrap();

    tree.cut_task(root_id, 0, 1).unwrap();

    let root = tree.get_board(root_id).unwrap();
    assert_eq!(root.columns[0].tasks.len(), 1);
    assert_eq!(root.columns[0].tasks[0].task.name, "keep");
    assert!(root.children.is_empty());
    assert!(tree.child_boards.is_empty());

    let buffered = tree.task_buffer.item().unwrap();
    assert_eq!(buffered.task.name, "level 0");
    assert_eq!(buffered.child_board, Some(child_id));
    assert_eq!(tree.task_buffer.descendants().len(), 1);

    assert!(tree.paste_task(root_id, 1, usize::MAX).unwrap());
    let root = tree.get_board(root_id).unwrap();
    assert_eq!(root.columns[1].tasks.len(), 1);
    let pasted = &root.columns[1].tasks[0];
    assert_eq!(pasted.task.name, "level 0");
    assert_eq!(pasted.task.priority, 0);
    let new_child_id = pasted.child_board.unwrap();
    assert_ne!(new_child_id, child_id);
    assert_eq!(root.children, vec![new_child_id]);
    assert_eq!(
        tree.get_board(new_child_id).unwrap().parent_task,
        Some(pasted.task.id)
    );
}

#[test]
fn paste_task_reindexes_from_insertion_point() {
    let (mut tree, root_id, _) = tree_with_chain(0);
    for name in ["eat", "code", "read"] {
        tree.create_task(root_id, 0, usize::MAX, name.to_string(), String::new())
            .unwrap();
    }
    tree.cut_task(root_id, 0, 2).unwrap();
    assert!(tree.paste_task(root_id, 0, 0).unwrap());

    let column = tree.get_board(root_id).unwrap().column(0).unwrap();
    let names: Vec<&str> = column.tasks.iter().map(|t| t.task.name.as_str()).collect();
    assert_eq!(names, vec!["read", "eat", "code"]);
    let priorities: Vec<usize> = column.tasks.iter().map(|t| t.task.priority).collect();
    assert_eq!(priorities, vec![0, 1, 2]);
}

#[test]
fn deep_copy_with_missing_pool_board_keeps_link_unresolved() {
    let mut tree = BoardTree::new();
    let board = tree.new_board("Root");
    let root_id = board.id;
    tree.add_root(board);
    tree.create_task(root_id, 0, 0, "broken".to_string(), String::new())
        .unwrap();

    // point the task at a board the tree has never seen
    {
        let root = tree.get_board_mut(root_id).unwrap();
        root.columns[0].tasks[0].child_board = Some(999);
        root.children.push(999);
    }

    tree.cut_root_board(root_id).unwrap();
    assert!(tree.board_buffer.descendants().is_empty());

    let new_root_id = tree.paste_root_board().unwrap();
    let new_root = tree.get_board(new_root_id).unwrap();
    // the copy keeps the stale link but resolves nothing
    assert_eq!(new_root.columns[0].tasks[0].child_board, Some(999));
    assert!(new_root.children.is_empty());
    assert!(tree.child_boards.is_empty());
}

#[test]
fn duplicate_root_board_copies_the_live_subtree() {
    let (mut tree, root_id, _) = tree_with_chain(2);

    let copy_id = tree.duplicate_root_board(root_id).unwrap();
    assert_ne!(copy_id, root_id);

    // original untouched
    assert_eq!(tree.get_board(root_id).unwrap().children.len(), 1);
    assert_eq!(tree.root_boards.len(), 2);
    // both subtrees fully registered
    assert_eq!(tree.child_boards.len(), 4);
    assert_unique(&all_board_ids(&tree));
    assert_unique(&all_task_ids(&tree));

    let copy = tree.get_board(copy_id).unwrap();
    assert_eq!(copy.title, "Root");
    let copied_child = tree.get_board(copy.children[0]).unwrap();
    assert_eq!(copied_child.title, "Sub 0");
    assert_eq!(copied_child.children.len(), 1);
}

#[test]
fn cut_root_board_not_found() {
    let mut tree = BoardTree::new();
    assert!(tree.cut_root_board(1).is_err());
    assert!(tree.paste_root_board().is_none());
}
