use assert_cmd::Command;

const DEFAULT_SWEEP: &str = concat!(
    " 0\n",
    " 0 1\n",
    " 0 1 2\n",
    " 0 1 2 3\n",
    " 0 1 2 3 4\n",
    " 0 1 2 3 4 5\n",
    " 0 1 2 3 4 5 6\n",
    " 0 1 2 3 4 5 6 7\n",
    " 0 1 2 3 4 5 6\n",
    " 0 1 2 3 4 5\n",
    " 0 1 2 3 4\n",
    " 0 1 2 3\n",
    " 0 1 2\n",
    " 0 1\n",
    " 0\n",
);

fn bin() -> Command {
    Command::cargo_bin("triangle-sweep").expect("binary")
}

#[test]
fn bare_invocation_prints_the_default_sweep() {
    bin().assert().success().stdout(DEFAULT_SWEEP);
}

#[test]
fn bare_invocation_is_idempotent() {
    let first = bin().assert().success();
    let second = bin().assert().success();
    assert_eq!(
        first.get_output().stdout,
        second.get_output().stdout,
    );
}

#[test]
fn explicit_bound_matches_the_mirrored_shape() {
    bin()
        .args(["print", "--bound", "3"])
        .assert()
        .success()
        .stdout(" 0\n 0 1\n 0 1 2\n 0 1 2 3\n 0 1 2\n 0 1\n 0\n");
}

#[test]
fn zero_bound_prints_the_peak_once() {
    bin()
        .args(["print", "--bound", "0"])
        .assert()
        .success()
        .stdout(" 0\n");
}

#[test]
fn negative_bound_prints_nothing_and_succeeds() {
    bin()
        .args(["print", "--bound=-1"])
        .assert()
        .success()
        .stdout("");
}

#[test]
fn tinted_rows_are_wrapped_in_color_and_reset() {
    bin()
        .args(["print", "--bound", "0", "--color", "red"])
        .assert()
        .success()
        .stdout("\x1b[31m 0\x1b[0m\n");
}

#[test]
fn malformed_color_spec_is_a_hard_error() {
    bin()
        .args(["print", "--color", "notacolor"])
        .assert()
        .failure();
}

#[test]
fn color_listing_and_examples_run_clean() {
    bin().arg("colors").assert().success();
    bin().arg("examples").assert().success();
}
