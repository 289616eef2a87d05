/// Technical skills recognised in resumes, matched case-insensitively as whole words.
pub const TECH_SKILLS: &[&str] = &[
    "python",
    "java",
    "c++",
    "javascript",
    "typescript",
    "html",
    "css",
    "sql",
    "mongodb",
    "mysql",
    "postgresql",
    "firebase",
    "react",
    "angular",
    "vue",
    "node.js",
    "express",
    "django",
    "flask",
    "spring boot",
    "git",
    "github",
    "docker",
    "kubernetes",
    "aws",
    "azure",
    "gcp",
    "linux",
    "tensorflow",
    "keras",
    "pytorch",
    "scikit-learn",
    "pandas",
    "numpy",
    "opencv",
    "matplotlib",
    "seaborn",
    "hadoop",
    "spark",
    "airflow",
    "bash",
    "rest api",
    "graphql",
    "redis",
    "postgres",
    "jupyter",
    "vs code",
    "tableau",
    "power bi",
    "bigquery",
    "fastapi",
    "langchain",
    "transformers",
    "huggingface",
    "llm",
    "prompt engineering",
    "fine-tuning",
    "streamlit",
    "gradio",
    "cv2",
    "beautifulsoup",
    "selenium",
    "api integration",
];
