#![cfg(test)]
use async_trait::async_trait;
use neighmap_common::error::ResolveError;
use neighmap_common::exec::CommandRunner;
use neighmap_common::network::neighbor::BindingKind;
use neighmap_common::platform::Platform;
use neighmap_core::exec::SystemCommandRunner;
use neighmap_core::resolver::NeighborResolver;

const WINDOWS_TABLE: &str = "\
Interface: 192.168.1.34 --- 0x4
  Internet Address      Physical Address      Type
  192.168.1.1           30-23-03-41-9e-80     dynamic
  192.168.1.17          b8-27-eb-2d-41-66     dynamic
  192.168.1.255         ff-ff-ff-ff-ff-ff     static
";

const POSIX_TABLE: &str = "\
? (192.168.1.1) at 30:23:3:41:9e:80 [ether] on eth0
? (192.168.1.17) at b8:27:eb:2d:41:66 [ether] on eth0
? (192.168.1.99) at (incomplete) on eth0
";

/// Runner double that hands back a canned table dump.
struct FixedOutput(&'static str);

#[async_trait]
impl CommandRunner for FixedOutput {
    async fn run(&self, _command_line: &str) -> anyhow::Result<String> {
        Ok(self.0.to_string())
    }
}

/// Runner double simulating a failed process invocation.
struct FailingRunner;

#[async_trait]
impl CommandRunner for FailingRunner {
    async fn run(&self, command_line: &str) -> anyhow::Result<String> {
        anyhow::bail!("command {command_line:?} exited with exit status: 1")
    }
}

fn windows_resolver() -> NeighborResolver {
    NeighborResolver::with_platform(Box::new(FixedOutput(WINDOWS_TABLE)), Platform::Windows)
}

fn posix_resolver() -> NeighborResolver {
    NeighborResolver::with_platform(Box::new(FixedOutput(POSIX_TABLE)), Platform::Posix)
}

#[tokio::test]
async fn resolves_ip_from_windows_table() {
    let entry = windows_resolver()
        .resolve_by_ip("192.168.1.17")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(entry.mac.to_string(), "b8:27:eb:2d:41:66");
    assert_eq!(entry.kind, BindingKind::Dynamic);
}

#[tokio::test]
async fn resolves_mac_in_either_notation() {
    let resolver = windows_resolver();
    for input in ["30-23-03-41-9E-80", "30:23:03:41:9e:80"] {
        let entry = resolver.resolve_by_mac(input).await.unwrap().unwrap();
        assert_eq!(entry.ip, "192.168.1.1", "input {input:?}");
    }
}

#[tokio::test]
async fn resolves_padded_mac_from_posix_table() {
    let entry = posix_resolver()
        .resolve_by_mac("30:23:03:41:9e:80")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(entry.ip, "192.168.1.1");
    assert_eq!(entry.kind, BindingKind::Unknown);
}

#[tokio::test]
async fn absent_binding_is_none_not_error() {
    assert!(posix_resolver()
        .resolve_by_mac("de:ad:be:ef:00:01")
        .await
        .unwrap()
        .is_none());
    assert!(posix_resolver()
        .resolve_by_ip("10.99.99.99")
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn rejects_bad_inputs_before_running_anything() {
    struct Unreachable;

    #[async_trait]
    impl CommandRunner for Unreachable {
        async fn run(&self, _command_line: &str) -> anyhow::Result<String> {
            panic!("lookup with invalid input must not reach the runner");
        }
    }

    let resolver = NeighborResolver::new(Box::new(Unreachable));
    let err = resolver.resolve_by_mac("aa:bb:cc:dd:ee").await.unwrap_err();
    assert!(matches!(err, ResolveError::InvalidHardwareAddress(_)));
    let err = resolver.resolve_by_ip("192.168.1").await.unwrap_err();
    assert!(matches!(err, ResolveError::InvalidNetworkAddress(_)));
}

#[tokio::test]
async fn command_failure_surfaces_as_error() {
    let resolver = NeighborResolver::with_platform(Box::new(FailingRunner), Platform::Posix);
    let err = resolver.resolve_by_ip("192.168.1.1").await.unwrap_err();
    match err {
        ResolveError::CommandFailed { command, .. } => assert_eq!(command, "arp -an"),
        other => panic!("expected CommandFailed, got {other:?}"),
    }
}

#[cfg(unix)]
#[tokio::test]
async fn system_runner_captures_stdout() {
    let out = SystemCommandRunner.run("echo neighmap").await.unwrap();
    assert_eq!(out.trim(), "neighmap");
}

#[cfg(unix)]
#[tokio::test]
async fn system_runner_reports_nonzero_exit() {
    assert!(SystemCommandRunner.run("exit 3").await.is_err());
}
