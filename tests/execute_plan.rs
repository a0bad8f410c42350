use std::fs;
use tempfile::tempdir;

use gmv::rename::is_temp_path;
use gmv::{build_plan, execute_plan, GmvError, RenameOp};

#[test]
fn swap_exchanges_contents_on_disk() {
    let td = tempdir().unwrap();
    let a = td.path().join("a.txt");
    let b = td.path().join("b.txt");
    fs::write(&a, "alpha").unwrap();
    fs::write(&b, "beta").unwrap();

    let plan = build_plan(&[a.clone(), b.clone()], &[b.clone(), a.clone()]);
    let applied = execute_plan(&plan, false).unwrap();
    assert_eq!(applied, 3);

    assert_eq!(fs::read_to_string(&a).unwrap(), "beta");
    assert_eq!(fs::read_to_string(&b).unwrap(), "alpha");

    // no temp file is left behind
    let leftovers: Vec<_> = fs::read_dir(td.path())
        .unwrap()
        .filter_map(Result::ok)
        .filter(|e| is_temp_path(&e.path()))
        .collect();
    assert!(leftovers.is_empty());
}

#[test]
fn three_way_rotation_moves_every_file() {
    let td = tempdir().unwrap();
    let names = ["1", "2", "3"].map(|n| td.path().join(n));
    for (i, p) in names.iter().enumerate() {
        fs::write(p, format!("content-{i}")).unwrap();
    }
    // 1 -> 2, 2 -> 3, 3 -> 1
    let edited = [names[1].clone(), names[2].clone(), names[0].clone()];
    let plan = build_plan(&names, &edited);
    execute_plan(&plan, false).unwrap();

    assert_eq!(fs::read_to_string(&names[1]).unwrap(), "content-0");
    assert_eq!(fs::read_to_string(&names[2]).unwrap(), "content-1");
    assert_eq!(fs::read_to_string(&names[0]).unwrap(), "content-2");
}

#[test]
fn chain_keeps_every_file() {
    let td = tempdir().unwrap();
    let a = td.path().join("a");
    let b = td.path().join("b");
    let c = td.path().join("c");
    fs::write(&a, "A").unwrap();
    fs::write(&b, "B").unwrap();

    // a -> b, b -> c: nothing may be lost even though b is occupied.
    let plan = build_plan(&[a.clone(), b.clone()], &[b.clone(), c.clone()]);
    execute_plan(&plan, false).unwrap();

    assert!(!a.exists());
    assert_eq!(fs::read_to_string(&b).unwrap(), "A");
    assert_eq!(fs::read_to_string(&c).unwrap(), "B");
}

#[test]
fn directories_are_renamed_too() {
    let td = tempdir().unwrap();
    let d = td.path().join("old_dir");
    fs::create_dir(&d).unwrap();
    fs::write(d.join("inner"), "x").unwrap();
    let renamed = td.path().join("new_dir");

    execute_plan(&[RenameOp::new(d.clone(), renamed.clone())], false).unwrap();
    assert!(!d.exists());
    assert_eq!(fs::read_to_string(renamed.join("inner")).unwrap(), "x");
}

#[test]
fn dry_run_touches_nothing() {
    let td = tempdir().unwrap();
    let a = td.path().join("a");
    let b = td.path().join("b");
    fs::write(&a, "A").unwrap();
    fs::write(&b, "B").unwrap();

    let plan = build_plan(&[a.clone(), b.clone()], &[b.clone(), a.clone()]);
    assert_eq!(execute_plan(&plan, true).unwrap(), 0);
    assert_eq!(fs::read_to_string(&a).unwrap(), "A");
    assert_eq!(fs::read_to_string(&b).unwrap(), "B");
}

#[test]
fn failure_stops_at_first_error_and_keeps_earlier_renames() {
    let td = tempdir().unwrap();
    let a = td.path().join("a");
    let a2 = td.path().join("a2");
    let ghost = td.path().join("ghost");
    let c = td.path().join("c");
    let c2 = td.path().join("c2");
    fs::write(&a, "A").unwrap();
    fs::write(&c, "C").unwrap();

    let plan = vec![
        RenameOp::new(a.clone(), a2.clone()),
        RenameOp::new(ghost.clone(), td.path().join("never")),
        RenameOp::new(c.clone(), c2.clone()),
    ];
    let err = execute_plan(&plan, false).unwrap_err();
    match &err {
        GmvError::RenameFailed { from, .. } => assert_eq!(from, &ghost),
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(err.to_string().starts_with("failed to rename"));

    // first op stays applied, third never ran
    assert!(a2.exists());
    assert!(!a.exists());
    assert!(c.exists());
    assert!(!c2.exists());
}

#[test]
fn empty_plan_is_a_no_op() {
    assert_eq!(execute_plan(&[], false).unwrap(), 0);
}

fn temp_leftovers(dir: &std::path::Path) -> Vec<std::path::PathBuf> {
    fs::read_dir(dir)
        .unwrap()
        .filter_map(Result::ok)
        .map(|e| e.path())
        .filter(|p| is_temp_path(p))
        .collect()
}

#[test]
fn rotations_of_every_size_keep_all_contents() {
    for n in 2..=10 {
        let td = tempdir().unwrap();
        let names: Vec<_> = (0..n).map(|i| td.path().join(format!("f{i}"))).collect();
        for (i, p) in names.iter().enumerate() {
            fs::write(p, format!("content-{i}")).unwrap();
        }
        // f(i) -> f(i-1): every file moves one place left
        let mut edited = names.clone();
        edited.rotate_right(1);

        let plan = build_plan(&names, &edited);
        execute_plan(&plan, false).unwrap();

        for (i, target) in edited.iter().enumerate() {
            let got = fs::read_to_string(target)
                .unwrap_or_else(|e| panic!("n={n}: {} missing: {e}", target.display()));
            assert_eq!(got, format!("content-{i}"), "n={n}: wrong content in {}", target.display());
        }
        assert!(temp_leftovers(td.path()).is_empty(), "n={n}: temp left behind");
    }
}

#[test]
fn mixed_request_of_cycles_chain_and_plain_rename() {
    let td = tempdir().unwrap();
    let p = |n: &str| td.path().join(n);
    let sources = ["s1", "s2", "r1", "r2", "r3", "c1", "c2", "lone"];
    for name in sources {
        fs::write(p(name), name).unwrap();
    }

    // swap s1/s2, rotate r1 -> r2 -> r3 -> r1, chain c1 -> c2 -> c3, lone -> single
    let original: Vec<_> = sources.iter().map(|&n| p(n)).collect();
    let edited: Vec<_> = ["s2", "s1", "r2", "r3", "r1", "c2", "c3", "single"]
        .iter()
        .map(|&n| p(n))
        .collect();

    let plan = build_plan(&original, &edited);
    execute_plan(&plan, false).unwrap();

    for (src, dst) in sources.iter().zip(&edited) {
        assert_eq!(
            fs::read_to_string(dst).unwrap(),
            *src,
            "{} should hold {src}",
            dst.display()
        );
    }
    assert!(!p("lone").exists());
    assert!(temp_leftovers(td.path()).is_empty());

    let mut on_disk: Vec<_> = fs::read_dir(td.path())
        .unwrap()
        .filter_map(Result::ok)
        .map(|e| e.file_name().to_string_lossy().into_owned())
        .collect();
    on_disk.sort();
    assert_eq!(on_disk, ["c2", "c3", "r1", "r2", "r3", "s1", "s2", "single"]);
}
