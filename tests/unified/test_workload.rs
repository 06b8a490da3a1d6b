use expect_test::expect;
use std::fmt::Write;
use std::writeln;
use wordmap::table::AhashTable;
use wordmap::table::FoldTable;
use wordmap::table::StdTable;
use wordmap::table::Table;
use wordmap::token::tokenize;
use wordmap::workload;
use wordmap::workload::Workload;

const TEXT: &str = "\
  LEAR. Nothing will come of nothing: speak again.\n\
  CORDELIA. Unhappy that I am, I cannot heave\n\
  My heart into my mouth.";

fn words(text: &str) -> Vec<String> {
  return tokenize(text);
}

fn dump<T: Table>(t: &T, words: &[String]) -> String {
  let mut keys = words.to_vec();
  keys.sort();
  keys.dedup();

  let entries = keys.iter().map(|k| (k, t.get(k))).filter(|&(_, v)| v != 0);
  return format!("[{}]", entries.map(|(k, v)| format!("{k}={v}")).collect::<Vec<_>>().join(" "));
}

fn check_insert<T: Table>() {
  let w = words("a b a");
  let t = workload::insert::<T>(&w);

  assert_eq!(t.len(), 2);
  assert_eq!(t.get("a"), 2);
  assert_eq!(t.get("b"), 1);

  let w = words(TEXT);
  let t = workload::insert::<T>(&w);
  for k in &w {
    assert_eq!(t.get(k), w.iter().filter(|x| *x == k).count() as u64);
  }
}

fn check_lookup<T: Table>() {
  let w = words(TEXT);
  let t = workload::count::<T>(&w);
  let before = dump(&t, &w);

  let expected = w.iter().map(|k| t.get(k)).sum::<u64>();
  assert_eq!(workload::lookup(&t, &w), expected);
  assert_eq!(workload::lookup(&t, &w), expected);
  assert_eq!(dump(&t, &w), before);
  assert_eq!(workload::lookup(&t, &words("edgar")), 0);
}

fn check_update<T: Table>() {
  let w = words(TEXT);
  let mut t = workload::count::<T>(&w);

  workload::update(&mut t, &w);
  workload::update(&mut t, &w);

  for k in &w { assert_eq!(t.get(k), k.len() as u64); }
  assert_eq!(t.get("cannot"), 6);
}

fn check_delete<T: Table>() {
  let w = words(TEXT);
  let mut t = workload::count::<T>(&w);
  assert!(!t.is_empty());

  workload::delete(&mut t, &w);
  assert!(t.is_empty());

  workload::delete(&mut t, &w);
  assert!(t.is_empty());
}

fn check_all<T: Table>() {
  check_insert::<T>();
  check_lookup::<T>();
  check_update::<T>();
  check_delete::<T>();
}

#[test]
fn test_std() { check_all::<StdTable>(); }

#[test]
fn test_foldhash() { check_all::<FoldTable>(); }

#[test]
fn test_ahash() { check_all::<AhashTable>(); }

#[test]
fn test_case_folding() {
  let w = words("The the THE tHe");
  let t = workload::insert::<StdTable>(&w);

  assert_eq!(Table::len(&t), 1);
  assert_eq!(Table::get(&t, "the"), 4);
}

#[test]
fn test_workloads() -> Result<(), std::fmt::Error> {
  let mut s = String::new();
  let w = words(TEXT);

  for x in Workload::ALL {
    let mut t = x.setup::<FoldTable>(&w);
    writeln!(s, "{x} setup: {}", dump(&t, &w))?;

    for i in 1 ..= 2 {
      let r = x.run(&mut t, &w);
      writeln!(s, "{x} run {i} -> {r}: {}", dump(&t, &w))?;
    }
  }

  expect![[r#"
      insert setup: []
      insert run 1 -> 18: [again=1 am=1 cannot=1 come=1 cordelia=1 heart=1 heave=1 i=2 into=1 lear=1 mouth=1 my=2 nothing=2 of=1 speak=1 that=1 unhappy=1 will=1]
      insert run 2 -> 18: [again=1 am=1 cannot=1 come=1 cordelia=1 heart=1 heave=1 i=2 into=1 lear=1 mouth=1 my=2 nothing=2 of=1 speak=1 that=1 unhappy=1 will=1]
      lookup setup: [again=1 am=1 cannot=1 come=1 cordelia=1 heart=1 heave=1 i=2 into=1 lear=1 mouth=1 my=2 nothing=2 of=1 speak=1 that=1 unhappy=1 will=1]
      lookup run 1 -> 27: [again=1 am=1 cannot=1 come=1 cordelia=1 heart=1 heave=1 i=2 into=1 lear=1 mouth=1 my=2 nothing=2 of=1 speak=1 that=1 unhappy=1 will=1]
      lookup run 2 -> 27: [again=1 am=1 cannot=1 come=1 cordelia=1 heart=1 heave=1 i=2 into=1 lear=1 mouth=1 my=2 nothing=2 of=1 speak=1 that=1 unhappy=1 will=1]
      update setup: [again=1 am=1 cannot=1 come=1 cordelia=1 heart=1 heave=1 i=2 into=1 lear=1 mouth=1 my=2 nothing=2 of=1 speak=1 that=1 unhappy=1 will=1]
      update run 1 -> 18: [again=5 am=2 cannot=6 come=4 cordelia=8 heart=5 heave=5 i=1 into=4 lear=4 mouth=5 my=2 nothing=7 of=2 speak=5 that=4 unhappy=7 will=4]
      update run 2 -> 18: [again=5 am=2 cannot=6 come=4 cordelia=8 heart=5 heave=5 i=1 into=4 lear=4 mouth=5 my=2 nothing=7 of=2 speak=5 that=4 unhappy=7 will=4]
      delete setup: [again=1 am=1 cannot=1 come=1 cordelia=1 heart=1 heave=1 i=2 into=1 lear=1 mouth=1 my=2 nothing=2 of=1 speak=1 that=1 unhappy=1 will=1]
      delete run 1 -> 0: []
      delete run 2 -> 0: []
  "#]].assert_eq(&s);

  Ok(())
}
