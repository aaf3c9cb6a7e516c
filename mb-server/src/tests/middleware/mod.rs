mod authenticate;
