//! End-to-end dispatch flow tests with fake workers
//!
//! These exercise the full protocol of each command: workspace validation,
//! descriptor resolution, worker invocation, output streaming, and the
//! terminal notification.

mod common;

use common::{test_context, write_worker};
use ioxdev_core::dispatch::{self, AbortReason, CommandStatus};
use ioxdev_core::templates::TemplateCatalog;

#[tokio::test]
async fn generate_without_descriptor_offers_creation_and_spawns_nothing() {
    let workspace = tempfile::tempdir().unwrap();
    let install = tempfile::tempdir().unwrap();
    // A worker that would leave a marker if it ever ran.
    write_worker(
        install.path(),
        "plugin.py",
        "touch \"$1/worker-ran\"\nexit 0\n",
    );
    let (ctx, reporter) = test_context(
        Some(workspace.path().to_path_buf()),
        install.path().to_path_buf(),
    );

    let status = dispatch::generate_code(&ctx).await;

    assert_eq!(
        status,
        CommandStatus::Aborted(AbortReason::DescriptorMissing)
    );
    assert!(reporter.saw_error("descriptor"));
    assert!(reporter.saw_error("ioxdev init"));
    assert_eq!(reporter.refresh_count(), 0);
    assert!(!workspace.path().join("worker-ran").exists());
}

#[tokio::test]
async fn generate_without_workspace_never_resolves_a_descriptor() {
    let install = tempfile::tempdir().unwrap();
    let (ctx, reporter) = test_context(None, install.path().to_path_buf());

    let status = dispatch::generate_code(&ctx).await;

    assert_eq!(status, CommandStatus::Aborted(AbortReason::NoWorkspace));
    assert!(reporter.saw_error("No open workspace"));
    assert_eq!(reporter.refresh_count(), 0);
}

#[tokio::test]
async fn generate_success_streams_output_and_requests_refresh() {
    let workspace = tempfile::tempdir().unwrap();
    let descriptor = workspace.path().join("foo.iox_plugin.json");
    std::fs::write(&descriptor, "{}").unwrap();

    let install = tempfile::tempdir().unwrap();
    write_worker(
        install.path(),
        "plugin.py",
        "echo generating nodes\nprintf '%s\\n%s\\n' \"$1\" \"$2\" > \"$1/args.txt\"\nexit 0\n",
    );
    let (ctx, reporter) = test_context(
        Some(workspace.path().to_path_buf()),
        install.path().to_path_buf(),
    );

    let status = dispatch::generate_code(&ctx).await;

    assert_eq!(status, CommandStatus::Succeeded);
    assert!(reporter.saw_info("generating nodes"));
    assert!(reporter.saw_info("completed successfully"));
    assert_eq!(reporter.refresh_count(), 1);

    // The worker received (workspace_root, descriptor_path) positionally.
    let args = std::fs::read_to_string(workspace.path().join("args.txt")).unwrap();
    let lines: Vec<&str> = args.lines().collect();
    assert_eq!(lines[0], workspace.path().to_str().unwrap());
    assert_eq!(lines[1], descriptor.to_str().unwrap());
}

#[tokio::test]
async fn generate_worker_failure_surfaces_the_exit_code() {
    let workspace = tempfile::tempdir().unwrap();
    std::fs::write(workspace.path().join("foo.iox_plugin.json"), "{}").unwrap();

    let install = tempfile::tempdir().unwrap();
    write_worker(install.path(), "plugin.py", "echo bad schema >&2\nexit 3\n");
    let (ctx, reporter) = test_context(
        Some(workspace.path().to_path_buf()),
        install.path().to_path_buf(),
    );

    let status = dispatch::generate_code(&ctx).await;

    assert_eq!(status, CommandStatus::WorkerFailed(3));
    assert!(reporter.saw_error("bad schema"));
    assert!(reporter.saw_error("3"));
    assert_eq!(reporter.refresh_count(), 0);
}

#[tokio::test]
async fn missing_launcher_reports_launch_failure_not_exit_code() {
    let workspace = tempfile::tempdir().unwrap();
    std::fs::write(workspace.path().join("foo.iox_plugin.json"), "{}").unwrap();

    let install = tempfile::tempdir().unwrap();
    let (mut ctx, reporter) = test_context(
        Some(workspace.path().to_path_buf()),
        install.path().to_path_buf(),
    );
    ctx.worker_program = "/nonexistent/ioxdev-python".to_string();

    let status = dispatch::generate_code(&ctx).await;

    assert_eq!(status, CommandStatus::LaunchFailed);
    assert!(reporter.saw_error("Failed to launch"));
    assert_eq!(reporter.refresh_count(), 0);
}

#[tokio::test]
async fn create_project_cancelled_prompt_aborts_without_spawning() {
    let install = tempfile::tempdir().unwrap();
    write_worker(
        install.path(),
        "new_project.py",
        "touch \"$2/worker-ran\"\nexit 0\n",
    );
    let (ctx, reporter) = test_context(None, install.path().to_path_buf());

    let status = dispatch::create_project(&ctx, None).await;

    assert_eq!(status, CommandStatus::Aborted(AbortReason::Cancelled));
    assert!(reporter.saw_error("cancelled"));
    assert_eq!(reporter.refresh_count(), 0);
    assert!(!install.path().join("worker-ran").exists());
}

#[tokio::test]
async fn create_project_passes_destination_and_install_root() {
    let dest = tempfile::tempdir().unwrap();
    let install = tempfile::tempdir().unwrap();
    write_worker(
        install.path(),
        "new_project.py",
        "printf '%s\\n%s\\n' \"$1\" \"$2\" > \"$1/args.txt\"\nexit 0\n",
    );
    let (ctx, reporter) = test_context(None, install.path().to_path_buf());

    let status =
        dispatch::create_project(&ctx, Some(dest.path().to_str().unwrap().to_string())).await;

    assert_eq!(status, CommandStatus::Succeeded);
    assert!(reporter.saw_info("completed successfully"));
    assert_eq!(reporter.refresh_count(), 1);

    let args = std::fs::read_to_string(dest.path().join("args.txt")).unwrap();
    let lines: Vec<&str> = args.lines().collect();
    assert_eq!(lines[0], dest.path().to_str().unwrap());
    assert_eq!(lines[1], install.path().to_str().unwrap());
}

#[tokio::test]
async fn register_passes_identity_after_the_descriptor() {
    let workspace = tempfile::tempdir().unwrap();
    let descriptor = workspace.path().join("foo.iox_plugin.json");
    std::fs::write(&descriptor, "{}").unwrap();

    let install = tempfile::tempdir().unwrap();
    write_worker(
        install.path(),
        "local_store.py",
        "printf '%s\\n%s\\n%s\\n%s\\n' \"$1\" \"$2\" \"$3\" \"$4\" > \"$1/args.txt\"\nexit 0\n",
    );
    let (ctx, _reporter) = test_context(
        Some(workspace.path().to_path_buf()),
        install.path().to_path_buf(),
    );

    let status = dispatch::register_locally(&ctx, "dev@example.com", "admin").await;

    assert_eq!(status, CommandStatus::Succeeded);
    let args = std::fs::read_to_string(workspace.path().join("args.txt")).unwrap();
    let lines: Vec<&str> = args.lines().collect();
    assert_eq!(lines[0], workspace.path().to_str().unwrap());
    assert_eq!(lines[1], descriptor.to_str().unwrap());
    assert_eq!(lines[2], "dev@example.com");
    assert_eq!(lines[3], "admin");
}

#[tokio::test]
async fn deploy_requires_a_descriptor() {
    let workspace = tempfile::tempdir().unwrap();
    let install = tempfile::tempdir().unwrap();
    write_worker(
        install.path(),
        "install_on_iox.py",
        "touch \"$1/worker-ran\"\nexit 0\n",
    );
    let (ctx, reporter) = test_context(
        Some(workspace.path().to_path_buf()),
        install.path().to_path_buf(),
    );

    let status = dispatch::deploy(&ctx).await;

    assert_eq!(
        status,
        CommandStatus::Aborted(AbortReason::DescriptorMissing)
    );
    assert!(reporter.saw_error("descriptor"));
    assert!(!workspace.path().join("worker-ran").exists());
}

#[tokio::test]
async fn author_descriptor_installs_the_selected_template() {
    let workspace = tempfile::tempdir().unwrap();
    let install = tempfile::tempdir().unwrap();
    let (ctx, reporter) = test_context(
        Some(workspace.path().to_path_buf()),
        install.path().to_path_buf(),
    );

    let catalog = TemplateCatalog::load().unwrap();
    let option = catalog.options()[0].clone();

    let status = dispatch::author_descriptor(&ctx, &catalog, Some(&option)).await;

    assert_eq!(status, CommandStatus::Succeeded);
    assert!(reporter.saw_info("Template copied to"));
    assert_eq!(reporter.refresh_count(), 1);

    // The install left exactly one descriptor for later commands to find.
    assert!(matches!(
        ioxdev_core::descriptor::resolve(Some(workspace.path())),
        ioxdev_core::descriptor::Resolution::Found(_)
    ));
}

#[tokio::test]
async fn author_descriptor_without_workspace_aborts() {
    let install = tempfile::tempdir().unwrap();
    let (ctx, reporter) = test_context(None, install.path().to_path_buf());

    let catalog = TemplateCatalog::load().unwrap();
    let option = catalog.options()[0].clone();

    let status = dispatch::author_descriptor(&ctx, &catalog, Some(&option)).await;

    assert_eq!(status, CommandStatus::Aborted(AbortReason::NoWorkspace));
    assert!(reporter.saw_error("No open workspace"));
}

#[tokio::test]
async fn author_descriptor_cancelled_picker_aborts_quietly() {
    let workspace = tempfile::tempdir().unwrap();
    let install = tempfile::tempdir().unwrap();
    let (ctx, reporter) = test_context(
        Some(workspace.path().to_path_buf()),
        install.path().to_path_buf(),
    );

    let catalog = TemplateCatalog::load().unwrap();
    let status = dispatch::author_descriptor(&ctx, &catalog, None).await;

    assert_eq!(status, CommandStatus::Aborted(AbortReason::Cancelled));
    assert!(reporter.saw_info("cancelled"));
    assert_eq!(reporter.refresh_count(), 0);
}

#[tokio::test]
async fn partial_output_is_kept_when_the_worker_later_fails() {
    let workspace = tempfile::tempdir().unwrap();
    std::fs::write(workspace.path().join("foo.iox_plugin.json"), "{}").unwrap();

    let install = tempfile::tempdir().unwrap();
    write_worker(
        install.path(),
        "plugin.py",
        "echo step one done\necho step two done\nexit 7\n",
    );
    let (ctx, reporter) = test_context(
        Some(workspace.path().to_path_buf()),
        install.path().to_path_buf(),
    );

    let status = dispatch::generate_code(&ctx).await;

    assert_eq!(status, CommandStatus::WorkerFailed(7));
    // Progress streamed before the failure stays visible.
    assert!(reporter.saw_info("step one done"));
    assert!(reporter.saw_info("step two done"));
}
