//! 页面渲染
//!
//! 所有HTML都由这里的纯函数拼接生成，handler只负责取数据。
//! 页面结构刻意保持简单：一个公共布局 + 每个页面一个渲染函数。

use crate::models::projects::ProjectView;
use crate::session::PageMeta;
use axum::response::Html;

/// HTML转义，所有来自用户输入的文本都要先过这里
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// 可选的技术标签，创建/编辑表单展示成复选框
const TECHNOLOGY_OPTIONS: [&str; 4] = ["nodejs", "reactjs", "vuejs", "golang"];

/// 公共页面布局：导航栏 + flash提示 + 内容区
fn layout(title: &str, meta: &PageMeta, body: &str) -> Html<String> {
    let nav_auth = if meta.is_login {
        format!(
            r#"<span>Hi, {}</span> <a href="/create-project">Add Project</a> <a href="/logout">Logout</a>"#,
            escape(&meta.user_name)
        )
    } else {
        r#"<a href="/login">Login</a> <a href="/register">Register</a>"#.to_string()
    };

    let flash = match &meta.flash {
        Some(message) => format!(r#"<p class="flash">{}</p>"#, escape(message)),
        None => String::new(),
    };

    Html(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>{title}</title>
  <link rel="stylesheet" href="/public/css/style.css">
</head>
<body>
  <nav>
    <a href="/">Home</a>
    <a href="/contact">Contact</a>
    {nav_auth}
  </nav>
  {flash}
  <main>
{body}
  </main>
</body>
</html>
"#
    ))
}

/// 首页：项目卡片列表
pub fn index_page(meta: &PageMeta, projects: &[ProjectView]) -> Html<String> {
    let mut cards = String::new();
    for p in projects {
        cards.push_str(&format!(
            r#"    <article class="card">
      <a href="/detail-project/{id}"><img src="/{image}" alt="{name}"></a>
      <h2><a href="/detail-project/{id}">{name}</a></h2>
      <p class="duration">{duration}</p>
      <p>{description}</p>
      <p class="technologies">{technologies}</p>
      <a href="/edit-project/{id}">edit</a>
      <a href="/delete-project/{id}">delete</a>
    </article>
"#,
            id = p.id,
            image = escape(&p.image),
            name = escape(&p.project_name),
            duration = escape(&p.duration),
            description = escape(&p.description),
            technologies = escape(&p.technologies.join(", ")),
        ));
    }

    let body = format!("    <h1>My Projects</h1>\n{cards}");
    layout("Home", meta, &body)
}

/// 项目详情页
pub fn detail_page(meta: &PageMeta, project: &ProjectView) -> Html<String> {
    let body = format!(
        r#"    <h1>{name}</h1>
    <img src="/{image}" alt="{name}">
    <p class="dates">{start} - {end} ({duration})</p>
    <p>{description}</p>
    <ul class="technologies">
{technologies}    </ul>
"#,
        name = escape(&project.project_name),
        image = escape(&project.image),
        start = escape(&project.start_date),
        end = escape(&project.end_date),
        duration = escape(&project.duration),
        description = escape(&project.description),
        technologies = project
            .technologies
            .iter()
            .map(|t| format!("      <li>{}</li>\n", escape(t)))
            .collect::<String>(),
    );
    layout(&project.project_name, meta, &body)
}

/// 项目表单的公共部分，创建和编辑共用
///
/// `current` 为None时渲染空表单（创建），否则带回显（编辑）
fn project_form(action: &str, current: Option<&ProjectView>) -> String {
    let (name, start, end, description) = match current {
        Some(p) => (
            escape(&p.project_name),
            escape(&p.start_date),
            escape(&p.end_date),
            escape(&p.description),
        ),
        None => Default::default(),
    };

    let mut checkboxes = String::new();
    for tech in TECHNOLOGY_OPTIONS {
        let checked = match current {
            Some(p) if p.technologies.iter().any(|t| t == tech) => " checked",
            _ => "",
        };
        checkboxes.push_str(&format!(
            r#"      <label><input type="checkbox" name="technologies" value="{tech}"{checked}> {tech}</label>
"#
        ));
    }

    format!(
        r#"    <form action="{action}" method="post" enctype="multipart/form-data">
      <label>Project Name <input type="text" name="project_name" value="{name}"></label>
      <label>Start Date <input type="date" name="start_date" value="{start}"></label>
      <label>End Date <input type="date" name="end_date" value="{end}"></label>
      <label>Description <textarea name="description">{description}</textarea></label>
{checkboxes}      <label>Image <input type="file" name="image"></label>
      <button type="submit">Submit</button>
    </form>
"#
    )
}

/// 创建项目页
pub fn create_project_page(meta: &PageMeta) -> Html<String> {
    let body = format!(
        "    <h1>Add Project</h1>\n{}",
        project_form("/store-project", None)
    );
    layout("Add Project", meta, &body)
}

/// 编辑项目页（表单带回显）
pub fn edit_project_page(meta: &PageMeta, project: &ProjectView) -> Html<String> {
    let body = format!(
        "    <h1>Edit Project</h1>\n{}",
        project_form(&format!("/edit-project/{}", project.id), Some(project))
    );
    layout("Edit Project", meta, &body)
}

/// 联系页
pub fn contact_page(meta: &PageMeta) -> Html<String> {
    let body = r#"    <h1>Contact Me</h1>
    <p>Email: me@example.com</p>
"#;
    layout("Contact", meta, body)
}

/// 注册页
pub fn register_page(meta: &PageMeta) -> Html<String> {
    let body = r#"    <h1>Register</h1>
    <form action="/register" method="post">
      <label>Name <input type="text" name="name"></label>
      <label>Email <input type="email" name="email"></label>
      <label>Password <input type="password" name="password"></label>
      <button type="submit">Register</button>
    </form>
"#;
    layout("Register", meta, body)
}

/// 登录页
pub fn login_page(meta: &PageMeta) -> Html<String> {
    let body = r#"    <h1>Login</h1>
    <form action="/login" method="post">
      <label>Email <input type="email" name="email"></label>
      <label>Password <input type="password" name="password"></label>
      <button type="submit">Login</button>
    </form>
"#;
    layout("Login", meta, body)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_view() -> ProjectView {
        ProjectView {
            id: 1,
            project_name: "Demo <Site>".to_string(),
            start_date: "2023-01-01".to_string(),
            end_date: "2023-02-10".to_string(),
            duration: "1 month 10 days".to_string(),
            description: "a demo".to_string(),
            technologies: vec!["nodejs".to_string(), "vuejs".to_string()],
            image: "public/uploads/demo-site.png".to_string(),
        }
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape(r#"<b>&"'"#), "&lt;b&gt;&amp;&quot;&#39;");
        assert_eq!(escape("plain"), "plain");
    }

    #[test]
    fn test_index_page_lists_projects_and_flash() {
        let meta = PageMeta {
            is_login: true,
            user_name: "alice".to_string(),
            flash: Some("Successfully login!".to_string()),
        };
        let Html(html) = index_page(&meta, &[sample_view()]);

        assert!(html.contains("Demo &lt;Site&gt;"));
        assert!(html.contains("1 month 10 days"));
        assert!(html.contains("Successfully login!"));
        assert!(html.contains("Hi, alice"));
    }

    #[test]
    fn test_logged_out_layout_shows_login_links() {
        let Html(html) = index_page(&PageMeta::default(), &[]);
        assert!(html.contains(r#"<a href="/login">Login</a>"#));
        assert!(!html.contains("Logout"));
    }

    #[test]
    fn test_edit_page_prefills_form() {
        let Html(html) = edit_project_page(&PageMeta::default(), &sample_view());
        assert!(html.contains(r#"action="/edit-project/1""#));
        assert!(html.contains(r#"value="2023-01-01""#));
        // 已选技术栈的复选框带checked
        assert!(html.contains(r#"value="nodejs" checked"#));
        assert!(html.contains(r#"value="reactjs">"#));
    }

    #[test]
    fn test_detail_page_shows_duration() {
        let Html(html) = detail_page(&PageMeta::default(), &sample_view());
        assert!(html.contains("(1 month 10 days)"));
    }
}
