use crate::models::{Colors, GenerationResult};

// Canned result served when no upstream model is configured.
// Only the prompt text varies.
pub fn mock_result(prompt: &str) -> GenerationResult {
    GenerationResult {
        name: "Nexus Generated Site".to_string(),
        description: format!("A modern website built for: {prompt}"),
        react_code: mock_component(prompt),
        colors: Colors {
            primary: "#3b82f6".to_string(),
            secondary: "#06b6d4".to_string(),
            accent: "#1e1b4b".to_string(),
        },
    }
}

fn mock_component(prompt: &str) -> String {
    format!(
        r#"
import React from 'react';

const GeneratedSite = () => {{
  return (
    <div className="min-h-screen bg-gray-900 text-white font-sans">
      <nav className="p-6 flex justify-between items-center border-b border-gray-800">
        <h1 className="text-2xl font-bold text-blue-400">Nexus AI</h1>
        <button className="bg-blue-600 px-4 py-2 rounded-lg hover:bg-blue-700">Get Started</button>
      </nav>
      <main className="max-w-6xl mx-auto px-6 py-20 text-center">
        <h2 className="text-5xl font-extrabold mb-6">
          <span className="text-blue-500">{prompt}</span>
        </h2>
        <p className="text-xl text-gray-400">Generated instantly from your description.</p>
      </main>
      <footer className="mt-40 p-10 border-t border-gray-800 text-center text-gray-500">
        <p>Nexus AI</p>
      </footer>
    </div>
  );
}};

export default GeneratedSite;
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_mentions_prompt() {
        let result = mock_result("A bakery landing page");
        assert_eq!(result.name, "Nexus Generated Site");
        assert_eq!(result.description, "A modern website built for: A bakery landing page");
        assert!(result.react_code.contains("GeneratedSite"));
        assert!(result.react_code.contains("A bakery landing page"));
        assert!(result.validate().is_ok());
    }
}
