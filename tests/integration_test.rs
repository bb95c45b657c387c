use chart_split_assign::config::Config;
use chart_split_assign::logger;
use chart_split_assign::orchestrator::App;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// 构造指向临时目录的测试配置
fn test_config(root: &Path) -> Config {
    Config {
        charts_folder: root.join("charts").to_string_lossy().to_string(),
        team_file: root.join("team.toml").to_string_lossy().to_string(),
        team_name: "甲组".to_string(),
        output_report_file: root
            .join("tmp")
            .join("charts_output.txt")
            .to_string_lossy()
            .to_string(),
        ..Config::default()
    }
}

/// 写入一份病历 JSON 文件
fn write_chart(charts_dir: &Path, file_name: &str, json: &str) {
    fs::write(charts_dir.join(file_name), json).expect("写入病历文件失败");
}

/// 写入包含两个团队的名册文件
fn write_team_file(root: &Path) {
    fs::write(
        root.join("team.toml"),
        r#"
            [[teams]]
            name = "甲组"

            [[teams.team_members]]
            name = "张三"

            [[teams.team_members]]
            name = "李四"

            [[teams]]
            name = "乙组"

            [[teams.team_members]]
            name = "王五"
        "#,
    )
    .expect("写入名册文件失败");
}

/// 生成处于待池中的病历 JSON
fn pool_chart_json(id: &str, filename: &str, markdown: &str) -> String {
    format!(
        r#"{{
            "_id": "{}",
            "filename": "{}",
            "ocr": {{"markdown": "{}"}},
            "workflow": {{
                "action_owner": "system",
                "current_action": "unassigned",
                "current_queue": "pool"
            }}
        }}"#,
        id, filename, markdown
    )
}

#[tokio::test]
async fn test_full_assignment_flow() {
    // 初始化日志
    logger::init();

    // 准备临时工作目录
    let dir = TempDir::new().expect("创建临时目录失败");
    let charts_dir = dir.path().join("charts");
    fs::create_dir_all(&charts_dir).expect("创建病历目录失败");
    write_team_file(dir.path());

    // 三份有效病历：3 页、2 页、1 页
    write_chart(
        &charts_dir,
        "chart_a.json",
        &pool_chart_json(
            "chart-a",
            "入院记录.pdf",
            "<!-- page 1 -->甲<!-- page 2 -->乙<!-- page 3 -->丙",
        ),
    );
    write_chart(
        &charts_dir,
        "chart_b.json",
        r#"{
            "_id": {"$oid": "66f2a41b9d2c4e001f3a1b2c"},
            "filename": "出院小结.pdf",
            "ocr": {"markdown": "<!-- page 1 -->内容<!-- PAGE 2 -->内容"},
            "workflow": {
                "action_owner": "system",
                "current_action": "unassigned",
                "current_queue": "pool"
            }
        }"#,
    );
    write_chart(
        &charts_dir,
        "chart_c.json",
        &pool_chart_json("chart-c", "检验报告.pdf", "<!-- page 1 -->单页"),
    );

    // 干扰项：已分配队列、无页码标记、非法 JSON
    write_chart(
        &charts_dir,
        "chart_assigned.json",
        r#"{
            "_id": "chart-assigned",
            "filename": "已分配.pdf",
            "ocr": {"markdown": "<!-- page 1 -->"},
            "workflow": {
                "action_owner": "system",
                "current_action": "unassigned",
                "current_queue": "assigned"
            }
        }"#,
    );
    write_chart(
        &charts_dir,
        "chart_no_pages.json",
        &pool_chart_json("chart-no-pages", "无页码.pdf", "没有页码标记的正文"),
    );
    write_chart(&charts_dir, "chart_broken.json", "这不是合法的 JSON");

    // 运行完整流程
    let config = test_config(dir.path());
    let report_path = config.output_report_file.clone();
    let app = App::initialize(config).await.expect("初始化应用失败");
    app.run().await.expect("运行应用失败");

    // 校验报告文件
    let content = fs::read_to_string(&report_path).expect("读取报告文件失败");

    // 清单部分
    assert!(content.contains("团队总数: 2"), "应写出团队总数");
    assert!(content.contains("甲组 成员数: 2"), "应写出指定团队的成员数");
    assert!(content.contains("成员: 张三, 李四"), "应写出成员名单");
    assert!(
        content.contains("ID: 66f2a41b9d2c4e001f3a1b2c"),
        "扩展 JSON 形式的 _id 应被解析"
    );
    assert!(content.contains("文件: 入院记录.pdf"), "清单应包含文件名");
    assert!(
        content.contains("筛选结果: 3 份文档"),
        "只有含页码的待池文档进入筛选结果"
    );
    assert!(
        !content.contains("已分配.pdf"),
        "非待池文档不应出现在清单中"
    );
    assert!(
        !content.contains("无页码.pdf"),
        "零页文档不应出现在清单中"
    );

    // 分配报告部分：页数 [3, 2, 1] 分给两人 → 负载 [3, 3]
    assert!(content.contains("病历分配报告"), "应追加分配报告");
    assert!(content.contains("总计: 3 份病历, 6 页, 2 名成员"));
    assert!(content.contains("平均: 3.00 页/人"));
    assert!(content.contains("张三: 1 份病历, 3 页"));
    assert!(content.contains("李四: 2 份病历, 3 页"));
    assert!(content.contains("负载均衡: 最小=3, 最大=3, 差值=0"));
    assert!(content.contains("均衡效率: 100.0%"));
}

#[tokio::test]
async fn test_missing_team_skips_assignment() {
    // 初始化日志
    logger::init();

    // 名册中不存在指定团队
    let dir = TempDir::new().expect("创建临时目录失败");
    let charts_dir = dir.path().join("charts");
    fs::create_dir_all(&charts_dir).expect("创建病历目录失败");
    write_team_file(dir.path());
    write_chart(
        &charts_dir,
        "chart_a.json",
        &pool_chart_json("chart-a", "入院记录.pdf", "<!-- page 1 -->正文"),
    );

    let mut config = test_config(dir.path());
    config.team_name = "丙组".to_string();
    let report_path = config.output_report_file.clone();

    let app = App::initialize(config).await.expect("初始化应用失败");
    app.run().await.expect("缺少团队不应导致运行失败");

    // 清单仍然写出，分配被跳过
    let content = fs::read_to_string(&report_path).expect("读取报告文件失败");
    assert!(content.contains("丙组 成员数: 0"));
    assert!(content.contains("成员: 无"));
    assert!(content.contains("筛选结果: 1 份文档"));
    assert!(
        !content.contains("病历分配报告"),
        "没有成员时不应追加分配报告"
    );
}

#[tokio::test]
async fn test_empty_charts_folder_skips_assignment() {
    // 初始化日志
    logger::init();

    // 病历目录存在但没有任何 JSON 文件
    let dir = TempDir::new().expect("创建临时目录失败");
    fs::create_dir_all(dir.path().join("charts")).expect("创建病历目录失败");
    write_team_file(dir.path());

    let config = test_config(dir.path());
    let report_path = config.output_report_file.clone();

    let app = App::initialize(config).await.expect("初始化应用失败");
    app.run().await.expect("空病历目录不应导致运行失败");

    let content = fs::read_to_string(&report_path).expect("读取报告文件失败");
    assert!(content.contains("筛选结果: 0 份文档"));
    assert!(
        !content.contains("病历分配报告"),
        "没有病历时不应追加分配报告"
    );
}

#[tokio::test]
async fn test_missing_charts_folder_is_fatal() {
    // 初始化日志
    logger::init();

    // 病历目录不存在
    let dir = TempDir::new().expect("创建临时目录失败");
    write_team_file(dir.path());

    let config = test_config(dir.path());
    let app = App::initialize(config).await.expect("初始化应用失败");

    let result = app.run().await;
    assert!(result.is_err(), "病历目录缺失应返回错误");
}
