use cafe_server::{Server, ServerState, print_banner, setup_environment};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. 设置环境 (dotenv, 日志, trace 导出) 并加载配置
    let (config, telemetry) = setup_environment()?;

    print_banner();
    tracing::info!(
        environment = %config.environment,
        port = config.http_port,
        "Cafe server starting..."
    );

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    let result = runtime.block_on(async move {
        // 2. 初始化服务器状态 (打开数据库, 执行迁移)
        let state = ServerState::initialize(&config).await?;

        // 3. 启动 HTTP 服务器
        Server::with_state(config, state).run().await
    });
    drop(runtime);

    if let Err(e) = &result {
        tracing::error!("Server error: {}", e);
    }
    telemetry.shutdown();

    Ok(result?)
}
