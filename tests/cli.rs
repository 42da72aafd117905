use assert_cmd::Command;
use predicates::prelude::*;

fn timewords() -> Command {
    let mut cmd = Command::cargo_bin("timewords").unwrap();
    cmd.env_remove("TIMEWORDS_JSON").env_remove("RUST_LOG");
    cmd
}

#[test]
fn parse_prints_phrase() {
    timewords()
        .args(["parse", "1d5h30m10s"])
        .assert()
        .success()
        .stdout("1 день 5 часов 30 минут 10 секунд\n");
}

#[test]
fn parse_bare_number_as_minutes() {
    timewords()
        .args(["parse", "90"])
        .assert()
        .success()
        .stdout("1 час 30 минут\n");
}

#[test]
fn parse_rejects_zero_and_garbage() {
    for input in ["0", "0d0h0m0s", "5x"] {
        timewords()
            .args(["parse", input])
            .assert()
            .code(2)
            .stderr(predicate::str::contains(format!("invalid duration: \"{input}\"")));
    }
}

#[test]
fn parse_json_output() {
    timewords()
        .args(["--json", "parse", "2h"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"seconds\":7200"))
        .stdout(predicate::str::contains("\"hours\":2"))
        .stdout(predicate::str::contains("\"text\":\"2 часа\""));
}

#[test]
fn humanize_zero_is_sub_second() {
    timewords()
        .args(["humanize", "0"])
        .assert()
        .success()
        .stdout("0.1 секунды\n");
}

#[test]
fn calendar_commands() {
    timewords()
        .args(["date", "1971-12-31"])
        .assert()
        .success()
        .stdout("31 декабря 1971\n");

    timewords()
        .args(["time", "09:05"])
        .assert()
        .success()
        .stdout("9:05\n");

    timewords()
        .args(["datetime", "1999-09-01T09:00"])
        .assert()
        .success()
        .stdout("9:00 1 сентября 1999\n");
}

#[test]
fn datetime_defaults_to_now() {
    timewords()
        .arg("datetime")
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"^\d{1,2}:\d{2} \d{1,2} \S+ \d{4}\n$").unwrap());
}

#[test]
fn converters() {
    timewords()
        .args(["bool", "Да"])
        .assert()
        .success()
        .stdout("true\n");

    timewords()
        .args(["bool", "maybe"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid boolean: \"maybe\""));

    timewords()
        .args(["int", "-42"])
        .assert()
        .success()
        .stdout("-42\n");
}

#[test]
fn json_output_from_environment() {
    timewords()
        .env("TIMEWORDS_JSON", "true")
        .args(["humanize", "3600"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("{"))
        .stdout(predicate::str::contains("\"seconds\":3600"))
        .stdout(predicate::str::contains("\"text\":\"1 час\""));
}

#[test]
fn quiet_still_prints_results() {
    timewords()
        .args(["-q", "parse", "2h"])
        .assert()
        .success()
        .stdout("2 часа\n")
        .stderr("");
}

#[test]
fn verbose_reports_seconds_on_stderr() {
    timewords()
        .args(["-v", "parse", "1d5h30m10s"])
        .assert()
        .success()
        .stdout("1 день 5 часов 30 минут 10 секунд\n")
        .stderr(predicate::str::contains("Parsed 106210 seconds"));
}
