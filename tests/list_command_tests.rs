use assert_cmd::prelude::*;
use predicates::prelude::*;

mod common;
use common::{assertions, workspace::TestEnv};

#[cfg(test)]
mod list_command_tests {
    use super::*;

    #[test]
    fn test_list_empty_prints_nothing_to_stdout() -> anyhow::Result<()> {
        let env = TestEnv::new()?;

        env.cmd()
            .arg("list")
            .assert()
            .success()
            .stdout(predicate::str::is_empty())
            .stderr(predicate::str::contains("No bookmarks"));

        Ok(())
    }

    #[test]
    fn test_list_sorts_by_key_with_ordinals() -> anyhow::Result<()> {
        let env = TestEnv::new()?;
        let beta = env.make_dir("beta")?;
        let alpha = env.make_dir("alpha")?;

        // Insertion order is beta, alpha; the listing is sorted.
        env.add("beta", &beta);
        env.add("alpha", &alpha);

        env.cmd()
            .arg("list")
            .assert()
            .success()
            .stdout(assertions::listing_row(1, "alpha"))
            .stdout(assertions::listing_row(2, "beta"));

        Ok(())
    }

    #[test]
    fn test_rm_by_ordinal_renumbers_listing() -> anyhow::Result<()> {
        let env = TestEnv::new()?;
        let a = env.make_dir("a")?;
        let b = env.make_dir("b")?;
        env.add("a", &a);
        env.add("b", &b);

        env.cmd()
            .args(["rm", "1"])
            .assert()
            .success()
            .stderr(predicate::str::contains("Removed a"));

        // b moves up to position 1.
        env.cmd()
            .arg("list")
            .assert()
            .success()
            .stdout(assertions::listing_row(1, "b"))
            .stdout(predicate::str::contains("a  ").not());

        Ok(())
    }

    #[test]
    fn test_rm_by_key() -> anyhow::Result<()> {
        let env = TestEnv::new()?;
        let docs = env.make_dir("docs")?;
        env.add("docs", &docs);

        env.cmd()
            .args(["rm", "docs"])
            .assert()
            .success()
            .stderr(predicate::str::contains("Removed docs"));

        env.cmd()
            .arg("list")
            .assert()
            .success()
            .stdout(predicate::str::is_empty());

        Ok(())
    }

    #[test]
    fn test_rm_unknown_key_is_selector_error() -> anyhow::Result<()> {
        let env = TestEnv::new()?;
        let docs = env.make_dir("docs")?;
        env.add("docs", &docs);

        env.cmd()
            .args(["rm", "nope"])
            .assert()
            .code(1)
            .stderr(assertions::unknown_selector());

        Ok(())
    }

    #[test]
    fn test_rm_out_of_range_ordinal_is_selector_error() -> anyhow::Result<()> {
        let env = TestEnv::new()?;
        let docs = env.make_dir("docs")?;
        env.add("docs", &docs);

        env.cmd()
            .args(["rm", "5"])
            .assert()
            .code(1)
            .stderr(predicate::str::contains("out of range"));

        env.cmd()
            .args(["rm", "0"])
            .assert()
            .code(1)
            .stderr(predicate::str::contains("positive"));

        Ok(())
    }

    #[test]
    fn test_rm_does_not_touch_history() -> anyhow::Result<()> {
        let env = TestEnv::new()?;
        let docs = env.make_dir("docs")?;
        env.add("docs", &docs);
        env.go("docs");

        env.cmd().args(["rm", "docs"]).assert().success();

        // The visited path is still in history: bookmarks and history are
        // decoupled.
        env.cmd()
            .arg("hist")
            .assert()
            .success()
            .stdout(predicate::str::contains(docs.display().to_string()));

        Ok(())
    }
}
